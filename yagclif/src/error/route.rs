//! Failures tied to route registration and handler execution.

use thiserror::Error;

/// Error type user handlers may return.
///
/// Anything convertible into a boxed error works, including `String`,
/// `&str`, and `anyhow::Error`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while registering or invoking a [`crate::Route`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// A route with the same name is already registered.
    #[error("route {name} already used")]
    DuplicateName {
        /// The rejected route name.
        name: String,
    },

    /// The handler returned an error.
    #[error("handler failed: {0}")]
    Handler(#[source] HandlerError),

    /// The handler panicked; the unwind was caught at the route boundary.
    #[error("handler panicked: {message}")]
    HandlerPanicked {
        /// Panic payload rendered as text.
        message: String,
    },
}
