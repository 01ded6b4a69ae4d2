//! Crate-level error enum returned at the [`crate::App`] boundary.

use thiserror::Error;

use super::{DispatchError, ParseError, RouteError, SchemaError};

/// Result alias used across the public API.
pub type YagclifResult<T> = Result<T, YagclifError>;

/// Any failure surfaced by schema construction, parsing, routing, or dispatch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum YagclifError {
    /// Schema description was rejected.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Token stream did not satisfy the schema.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Route registration or handler execution failed.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// No route could be selected.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A failure with the application help appended for the end user.
    #[error("{source}\n{help}")]
    WithHelp {
        /// The underlying failure.
        source: Box<YagclifError>,
        /// Full multi-route help text.
        help: String,
    },
}

impl YagclifError {
    /// Attach rendered help text to this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use yagclif::{DispatchError, YagclifError};
    /// let err = YagclifError::from(DispatchError::NoActionSelected).with_help("usage");
    /// assert_eq!(err.to_string(), "no action was selected\nusage");
    /// ```
    #[must_use]
    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self::WithHelp {
            source: Box::new(self),
            help: help.into(),
        }
    }

    /// Returns the underlying failure with any help wrapper removed.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::WithHelp { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the appended help text, if any.
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        match self {
            Self::WithHelp { help, .. } => Some(help),
            _ => None,
        }
    }
}
