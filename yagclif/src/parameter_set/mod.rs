//! The validated, ordered collection of parameters for one schema type.
//!
//! A [`ParameterSet`] is built once per schema and is immutable afterwards.
//! Every parse allocates its own usage tracker, so one set can serve any
//! number of parses, including concurrent ones into distinct targets.

use std::collections::HashMap;

use tracing::debug;

use crate::extract::extract;
use crate::{EnvLookup, ParseError, Parameter, ProcessEnv, Schema, SchemaError};

mod parse;

/// Ordered parameters with unique cli names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    names: HashMap<String, usize>,
}

impl ParameterSet {
    /// Builds a set from already constructed parameters.
    ///
    /// # Errors
    ///
    /// Returns the [`Parameter::validate`] error of the first incoherent
    /// parameter, or [`SchemaError::NameConflict`] for the first cli name
    /// claimed by two parameters, naming both fields.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, SchemaError> {
        let mut names: HashMap<String, usize> = HashMap::new();
        for (position, parameter) in parameters.iter().enumerate() {
            parameter.validate()?;
            for name in parameter.cli_names() {
                if let Some(first) = names.get(&name).and_then(|&at| parameters.get(at)) {
                    return Err(SchemaError::NameConflict {
                        name,
                        first: first.name().to_owned(),
                        second: parameter.name().to_owned(),
                    });
                }
                names.insert(name, position);
            }
        }
        Ok(Self { parameters, names })
    }

    /// Extracts and validates the parameters of `T`, reading env defaults
    /// from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ParameterSet::from_schema_with`].
    pub fn from_schema<T: Schema>() -> Result<Self, SchemaError> {
        Self::from_schema_with::<T>(&ProcessEnv)
    }

    /// Extracts and validates the parameters of `T`.
    ///
    /// Every literal default and every non-empty env value is applied to a
    /// throwaway `T::default()` so a malformed default fails here rather than
    /// on some later parse.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for malformed constraints, incoherent metadata,
    /// defaults that do not convert, or conflicting cli names.
    pub fn from_schema_with<T: Schema>(env: &dyn EnvLookup) -> Result<Self, SchemaError> {
        let parameters = extract::<T>()?;
        for parameter in &parameters {
            probe_defaults::<T>(parameter, env)?;
        }
        let set = Self::new(parameters)?;
        debug!(
            schema = std::any::type_name::<T>(),
            parameters = set.len(),
            "built parameter set"
        );
        Ok(set)
    }

    /// The parameter matching `token`, if any.
    #[must_use]
    pub fn find(&self, token: &str) -> Option<&Parameter> {
        self.position(token).and_then(|at| self.parameters.get(at))
    }

    fn position(&self, token: &str) -> Option<usize> {
        self.names.get(token).copied()
    }

    /// Parameters in extraction order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Iterates the parameters in extraction order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Populate `target` from `tokens`, returning the unconsumed tokens.
    ///
    /// Env defaults are read from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ParameterSet::parse_arguments_with`].
    pub fn parse_arguments<T, S>(&self, target: &mut T, tokens: &[S]) -> Result<Vec<String>, ParseError>
    where
        T: Schema,
        S: AsRef<str>,
    {
        self.parse_arguments_with(target, tokens, &ProcessEnv)
    }

    /// Populate `target` from `tokens`, returning the unconsumed tokens in
    /// their original order.
    ///
    /// Defaults are written first; the tokens are then scanned once, left to
    /// right. A matched flag takes the following token as its value, except
    /// boolean flags which are satisfied by presence.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a flag repeats, a flag lacks its value, a
    /// value fails to convert, or a mandatory parameter remains unset.
    pub fn parse_arguments_with<T, S>(
        &self,
        target: &mut T,
        tokens: &[S],
        env: &dyn EnvLookup,
    ) -> Result<Vec<String>, ParseError>
    where
        T: Schema,
        S: AsRef<str>,
    {
        parse::parse(self, target, tokens, env)
    }

    /// One help line per parameter.
    #[must_use]
    pub fn help_lines(&self, env: &dyn EnvLookup) -> Vec<String> {
        self.parameters
            .iter()
            .map(|parameter| parameter.help_line(env))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

fn probe_defaults<T: Schema>(parameter: &Parameter, env: &dyn EnvLookup) -> Result<(), SchemaError> {
    let literal = parameter.default_value().map(|value| ("default".to_owned(), value.to_owned()));
    let from_env = parameter
        .env_key()
        .and_then(|key| env.non_empty(key).map(|value| (format!("env {key}"), value)));
    for (origin, value) in literal.into_iter().chain(from_env) {
        let mut probe = T::default();
        parameter
            .convert(&value)
            .and_then(|converted| probe.assign(parameter.path(), converted))
            .map_err(|err| SchemaError::InvalidDefault {
                field: parameter.name().to_owned(),
                origin,
                value,
                reason: err.to_string(),
            })?;
    }
    Ok(())
}
