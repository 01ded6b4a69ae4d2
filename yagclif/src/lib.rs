//! Struct-driven command-line parsing with sub-command routing.
//!
//! Describe a command's options as a plain struct, derive [`Schema`] on it,
//! and attach per-field constraints such as short names, defaults, and
//! environment fallbacks with `#[yagclif("...")]`. The library turns the
//! struct into a [`ParameterSet`], scans a token stream into a fresh
//! instance, and hands back whatever tokens it did not consume.
//!
//! An [`App`] groups several such commands under route names and dispatches
//! on the first argument.
//!
//! ```
//! use yagclif::{App, HandlerError, Schema};
//!
//! #[derive(Debug, Default, Schema)]
//! struct Greet {
//!     #[yagclif("shortname:n;default:world;description:who to greet")]
//!     name: String,
//!     #[yagclif("shortname:l")]
//!     loud: bool,
//! }
//!
//! let mut app = App::new("greeter", "says hello");
//! app.add_schema_route("greet", "greet someone", |greet: Greet, _rest| {
//!     let text = format!("hello {}", greet.name);
//!     println!("{}", if greet.loud { text.to_uppercase() } else { text });
//!     Ok::<_, HandlerError>(())
//! })?;
//! app.run_with_args(["greeter", "greet", "-n", "ada", "-l"], true)?;
//! # Ok::<_, yagclif::YagclifError>(())
//! ```

extern crate self as yagclif;

pub use yagclif_macros::Schema;

mod app;
mod constraint;
mod env;
mod error;
mod extract;
pub mod help;
mod parameter;
mod parameter_set;
mod route;
mod schema;
mod value;

pub use app::App;
pub use env::{EnvLookup, MapEnv, ProcessEnv};
pub use error::{
    DispatchError, HandlerError, ParseError, RouteError, SchemaError, ValueError, YagclifError,
    YagclifResult,
};
pub use extract::extract;
pub use parameter::{DEFAULT_DELIMITER, DefaultOrigin, LONG_PREFIX, Parameter, SHORT_PREFIX};
pub use parameter_set::ParameterSet;
pub use route::Route;
pub use schema::{FieldShape, FieldSpec, Schema};
pub use value::{FieldValue, Value, ValueKind};

/// Parse `tokens` into a fresh `T`, returning it with the unconsumed tokens.
///
/// `tokens` must not include the program name. Env defaults come from the
/// process environment.
///
/// # Errors
///
/// Returns [`YagclifError::Schema`] when `T` is not a valid schema and
/// [`YagclifError::Parse`] when the tokens do not satisfy it.
pub fn parse_from<T, I>(tokens: I) -> YagclifResult<(T, Vec<String>)>
where
    T: Schema,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let owned: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let set = ParameterSet::from_schema::<T>()?;
    let mut target = T::default();
    let rest = set.parse_arguments(&mut target, &owned)?;
    Ok((target, rest))
}

/// [`parse_from`] over the process arguments, program name excluded.
///
/// # Errors
///
/// See [`parse_from`].
pub fn parse<T: Schema>() -> YagclifResult<(T, Vec<String>)> {
    parse_from(std::env::args().skip(1))
}
