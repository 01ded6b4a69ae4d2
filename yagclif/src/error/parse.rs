//! Failures raised while scanning a token stream.

use thiserror::Error;

/// Errors raised by [`crate::ParameterSet::parse_arguments`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A mandatory parameter was neither supplied nor defaulted.
    #[error("missing mandatory value for {names}{}", describe(.description.as_deref()))]
    MissingMandatory {
        /// Space separated cli names of the parameter.
        names: String,
        /// Parameter description, when one was declared.
        description: Option<String>,
    },

    /// The same parameter appeared more than once.
    #[error("{name} used multiple times")]
    DuplicateUse {
        /// Cli name as typed by the user.
        name: String,
    },

    /// A value-taking flag was the last token.
    #[error("{name} doesn't have a value")]
    MissingValue {
        /// Cli name as typed by the user.
        name: String,
    },

    /// A value token failed to convert to the parameter type.
    #[error("invalid value '{token}' for {name}: {reason}")]
    InvalidValue {
        /// Cli name the value was supplied for.
        name: String,
        /// The rejected token.
        token: String,
        /// Conversion failure description.
        reason: String,
    },

    /// An env-sourced default no longer converts to the parameter type.
    #[error("invalid default '{value}' for {name}: {reason}")]
    InvalidDefault {
        /// Primary cli name of the parameter.
        name: String,
        /// The rejected value.
        value: String,
        /// Conversion failure description.
        reason: String,
    },
}

fn describe(description: Option<&str>) -> String {
    description.map_or_else(String::new, |text| format!(" ({text})"))
}
