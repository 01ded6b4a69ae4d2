//! Failures selecting a route from the first token.

use thiserror::Error;

/// Errors raised by [`crate::App`] before any route runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// No sub-command token followed the program name.
    #[error("no action was selected")]
    NoActionSelected,

    /// The first token names no registered route.
    #[error("{name} action not found")]
    ActionNotFound {
        /// The unknown route name.
        name: String,
    },
}
