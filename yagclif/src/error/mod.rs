//! Error types produced while building schemas, parsing tokens, and routing.
//!
//! Each failure family has its own enum so callers can match on the stage
//! that failed. [`YagclifError`] wraps all of them at the [`crate::App`]
//! boundary.

mod dispatch;
mod parse;
mod route;
mod schema;
mod types;
mod value;

pub use dispatch::DispatchError;
pub use parse::ParseError;
pub use route::{HandlerError, RouteError};
pub use schema::SchemaError;
pub use types::{YagclifError, YagclifResult};
pub use value::ValueError;
