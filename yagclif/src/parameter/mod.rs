//! A single field's binding contract.
//!
//! A [`Parameter`] knows its cli names, value kind, and the metadata declared
//! in its constraint string. It holds no parse-time state: whether it has
//! been used during a parse is tracked by the caller.

use std::fmt;

use serde::Serialize;

use crate::constraint::{CLAUSE_DELIMITER, Constraint, parse_constraints};
use crate::{EnvLookup, FieldSpec, SchemaError, Value, ValueError, ValueKind};

/// Prefix prepended to the lower-cased field name.
pub const LONG_PREFIX: &str = "--";

/// Prefix prepended to the lower-cased short name.
pub const SHORT_PREFIX: &str = "-";

/// Delimiter array fields use when none is declared.
pub const DEFAULT_DELIMITER: &str = CLAUSE_DELIMITER;

/// Binding contract for one schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    short_name: Option<String>,
    index: usize,
    path: Vec<usize>,
    description: Option<String>,
    mandatory: bool,
    default_value: Option<String>,
    env_key: Option<String>,
    delimiter: Option<String>,
    kind: ValueKind,
}

/// Where a resolved default came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum DefaultOrigin {
    /// The literal `default:` clause.
    Literal,
    /// The environment variable named by the `env:` clause.
    Env {
        /// Variable name.
        key: String,
    },
}

impl fmt::Display for DefaultOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => f.write_str("default"),
            Self::Env { key } => write!(f, "env {key}"),
        }
    }
}

impl Parameter {
    /// Creates an optional parameter with no metadata, bound to the field
    /// reached by `path`.
    ///
    /// `path` holds the declaration indices from the root schema down to the
    /// field; its last element is the field's own index. Array kinds start
    /// with [`DEFAULT_DELIMITER`].
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ValueKind, path: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            index: path.last().copied().unwrap_or_default(),
            path,
            description: None,
            mandatory: false,
            default_value: None,
            env_key: None,
            delimiter: kind.is_array().then(|| DEFAULT_DELIMITER.to_owned()),
            kind,
        }
    }

    /// Builds the parameter for a value field from its constraint string.
    ///
    /// `path` is the chain of declaration indices leading to the field.
    pub(crate) fn from_field(
        spec: &FieldSpec,
        kind: ValueKind,
        path: Vec<usize>,
    ) -> Result<Self, SchemaError> {
        let mut parameter = Self::new(spec.name, kind, path);
        for constraint in parse_constraints(spec.name, spec.tag)? {
            parameter.apply(constraint);
        }
        parameter.validate()?;
        Ok(parameter)
    }

    fn apply(&mut self, constraint: Constraint) {
        match constraint {
            Constraint::Description(text) => self.description = non_empty(text),
            Constraint::ShortName(short) => self.short_name = non_empty(short),
            Constraint::Mandatory => self.mandatory = true,
            Constraint::Default(value) => self.default_value = non_empty(value),
            Constraint::Env(key) => self.env_key = non_empty(key),
            Constraint::Delimiter(delimiter) => self.delimiter = Some(delimiter),
            Constraint::Omit => {}
        }
    }

    /// Sets the short alias.
    #[must_use]
    pub fn with_short_name(mut self, short: impl Into<String>) -> Self {
        self.short_name = non_empty(short.into());
        self
    }

    /// Sets the description used in help and errors.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    /// Marks the parameter as mandatory.
    #[must_use]
    pub const fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Sets the literal default.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = non_empty(value.into());
        self
    }

    /// Sets the environment variable consulted for a runtime default.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>) -> Self {
        self.env_key = non_empty(key.into());
        self
    }

    /// Sets the array delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Checks the metadata combination is coherent.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a mandatory or boolean parameter has a
    /// default, a scalar declares a delimiter, a boolean is mandatory, or an
    /// array delimiter is empty.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let field = || self.name.clone();
        let is_bool = self.kind == ValueKind::Bool;
        let has_default = self.default_value.is_some() || self.env_key.is_some();
        if (self.mandatory || is_bool) && has_default {
            return Err(SchemaError::DefaultNotAllowed { field: field() });
        }
        if !self.kind.is_array() && self.delimiter.is_some() {
            return Err(SchemaError::DelimiterOnScalar { field: field() });
        }
        if self.mandatory && is_bool {
            return Err(SchemaError::MandatoryBool { field: field() });
        }
        if self.kind.is_array() && self.delimiter.as_deref().is_none_or(str::is_empty) {
            return Err(SchemaError::EmptyDelimiter { field: field() });
        }
        Ok(())
    }

    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short alias, if declared.
    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    /// Declaration index within the owning struct.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declaration indices from the root schema to this field.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Description, if declared.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the parameter must be supplied.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Literal default, if declared.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Environment key consulted for a default, if declared.
    #[must_use]
    pub fn env_key(&self) -> Option<&str> {
        self.env_key.as_deref()
    }

    /// Array delimiter; `None` for scalar kinds.
    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// Value kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the parameter is satisfied by presence alone.
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.kind == ValueKind::Bool
    }

    /// Whether a default or env source is declared.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default_value.is_some() || self.env_key.is_some()
    }

    /// The long cli name, `--` followed by the lower-cased field name.
    #[must_use]
    pub fn long_name(&self) -> String {
        format!("{LONG_PREFIX}{}", self.name.to_lowercase())
    }

    /// Cli names matched against tokens: the long name, then the short name.
    ///
    /// # Examples
    ///
    /// ```
    /// use yagclif::{Parameter, ValueKind};
    /// let p = Parameter::new("Hello", ValueKind::String, vec![0]).with_short_name("H");
    /// assert_eq!(p.cli_names(), vec!["--hello".to_owned(), "-h".to_owned()]);
    /// ```
    #[must_use]
    pub fn cli_names(&self) -> Vec<String> {
        let mut names = vec![self.long_name()];
        if let Some(short) = &self.short_name {
            names.push(format!("{SHORT_PREFIX}{}", short.to_lowercase()));
        }
        names
    }

    /// Whether `token` is one of this parameter's cli names.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.cli_names().iter().any(|name| name == token)
    }

    /// Convert a raw token into this parameter's value kind.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when the token does not convert.
    pub fn convert(&self, raw: &str) -> Result<Value, ValueError> {
        self.kind.parse(raw, self.delimiter.as_deref())
    }

    /// Resolve the default to apply before scanning.
    ///
    /// A non-empty env value wins over the literal default.
    #[must_use]
    pub fn resolve_default(&self, env: &dyn EnvLookup) -> Option<(DefaultOrigin, String)> {
        let from_env = self.env_key.as_ref().and_then(|key| {
            env.non_empty(key)
                .map(|value| (DefaultOrigin::Env { key: key.clone() }, value))
        });
        from_env.or_else(|| {
            self.default_value
                .clone()
                .map(|value| (DefaultOrigin::Literal, value))
        })
    }

    /// One line of help text.
    ///
    /// Format: `<cli-names> <kind> [delimiter <d>] [(<infos>)] [: <description>]`.
    #[must_use]
    pub fn help_line(&self, env: &dyn EnvLookup) -> String {
        let mut line = format!("{} {}", self.cli_names().join(" "), self.kind);
        if let Some(delimiter) = self.delimiter.as_deref() {
            let shown = if delimiter == " " { "whitespace" } else { delimiter };
            line.push_str(&format!(" delimiter {shown}"));
        }
        let infos = self.help_infos(env);
        if !infos.is_empty() {
            line.push_str(&format!(" ({})", infos.join(";")));
        }
        if let Some(description) = &self.description {
            line.push_str(&format!(": {description}"));
        }
        line
    }

    fn help_infos(&self, env: &dyn EnvLookup) -> Vec<String> {
        let mut infos = Vec::new();
        if self.mandatory {
            infos.push("mandatory".to_owned());
        }
        if let Some(value) = &self.default_value {
            infos.push(format!("default={value}"));
        }
        if let Some(key) = &self.env_key {
            let value = env.get(key).unwrap_or_default();
            infos.push(format!("env={{key:{key},value:{value}}}"));
        }
        infos
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
