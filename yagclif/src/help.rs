//! Serialisable help document for tooling.
//!
//! [`crate::App::help`] renders text for humans. The types here carry the
//! same information in structured form so external tools can generate
//! man pages or completions without scraping that text.

use serde::Serialize;

use crate::{EnvLookup, Parameter, ValueKind};

/// Version of the help document layout.
pub const HELP_DOCUMENT_VERSION: &str = "1";

/// Help for a whole application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpDocument {
    /// Layout version, see [`HELP_DOCUMENT_VERSION`].
    pub version: String,
    /// Application name.
    pub name: String,
    /// Application description.
    pub description: String,
    /// Routes sorted by name.
    pub routes: Vec<RouteHelp>,
}

/// Help for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHelp {
    /// Route name as typed on the command line.
    pub name: String,
    /// Route description.
    pub description: String,
    /// Parameters, or `None` when the handler only takes raw tokens.
    pub parameters: Option<Vec<ParameterHelp>>,
}

/// Help for one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterHelp {
    /// Schema field name.
    pub field: String,
    /// Cli names, long first.
    pub cli_names: Vec<String>,
    /// Value kind.
    pub kind: ValueKind,
    /// Array delimiter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Whether the parameter must be supplied.
    pub mandatory: bool,
    /// Literal default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Env source and its current value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvHelp>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Environment variable backing a parameter default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvHelp {
    /// Variable name.
    pub key: String,
    /// Value at render time; empty when unset.
    pub value: String,
}

impl ParameterHelp {
    pub(crate) fn new(parameter: &Parameter, env: &dyn EnvLookup) -> Self {
        Self {
            field: parameter.name().to_owned(),
            cli_names: parameter.cli_names(),
            kind: parameter.kind(),
            delimiter: parameter.delimiter().map(str::to_owned),
            mandatory: parameter.is_mandatory(),
            default: parameter.default_value().map(str::to_owned),
            env: parameter.env_key().map(|key| EnvHelp {
                key: key.to_owned(),
                value: env.get(key).unwrap_or_default(),
            }),
            description: parameter.description().map(str::to_owned),
        }
    }
}
