//! Error type for the greeter binary.

use thiserror::Error;

/// Failures surfaced by `main`.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Route registration or dispatch failed.
    #[error(transparent)]
    Cli(#[from] yagclif::YagclifError),
    /// Help could not be written.
    #[error("failed to write help: {0}")]
    Io(#[from] std::io::Error),
}
