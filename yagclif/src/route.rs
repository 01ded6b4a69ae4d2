//! A named sub-command: description, optional schema, and bound handler.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::{
    EnvLookup, HandlerError, ParameterSet, ProcessEnv, RouteError, Schema, SchemaError,
    YagclifError,
};

type Invoke = dyn Fn(&[String], &dyn EnvLookup) -> Result<(), YagclifError>;

/// One registered sub-command.
///
/// A route is immutable once built. Its handler is type-checked at
/// construction, so invoking it can only fail by parse error, handler error,
/// or handler panic.
pub struct Route {
    description: String,
    parameters: Option<ParameterSet>,
    invoke: Box<Invoke>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Route {
    /// A route whose handler receives the raw tokens after the route name.
    ///
    /// # Examples
    ///
    /// ```
    /// use yagclif::Route;
    /// let route = Route::tokens_only("echo the tokens", |tokens| {
    ///     println!("{}", tokens.join(" "));
    ///     Ok::<_, std::io::Error>(())
    /// });
    /// assert!(!route.has_schema());
    /// ```
    #[must_use]
    pub fn tokens_only<F, E>(description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Vec<String>) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        Self {
            description: description.into(),
            parameters: None,
            invoke: Box::new(move |tokens: &[String], _env: &dyn EnvLookup| {
                call_handler(|| handler(tokens.to_vec()))
            }),
        }
    }

    /// A route whose handler receives a populated `T` and the leftover tokens.
    ///
    /// Env defaults are validated against the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `T` does not describe a valid parameter
    /// set.
    pub fn with_schema<T, F, E>(description: impl Into<String>, handler: F) -> Result<Self, SchemaError>
    where
        T: Schema + 'static,
        F: Fn(T, Vec<String>) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        Self::with_schema_and_env(description, handler, &ProcessEnv)
    }

    /// Like [`Route::with_schema`], validating env defaults against `env`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `T` does not describe a valid parameter
    /// set.
    pub fn with_schema_and_env<T, F, E>(
        description: impl Into<String>,
        handler: F,
        env: &dyn EnvLookup,
    ) -> Result<Self, SchemaError>
    where
        T: Schema + 'static,
        F: Fn(T, Vec<String>) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        let parameters = ParameterSet::from_schema_with::<T>(env)?;
        let bound = parameters.clone();
        let invoke = move |tokens: &[String], lookup: &dyn EnvLookup| {
            let mut target = T::default();
            let rest = bound.parse_arguments_with(&mut target, tokens, lookup)?;
            call_handler(|| handler(target, rest))
        };
        Ok(Self {
            description: description.into(),
            parameters: Some(parameters),
            invoke: Box::new(invoke),
        })
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the handler consumes a schema.
    #[must_use]
    pub const fn has_schema(&self) -> bool {
        self.parameters.is_some()
    }

    /// The schema's parameter set, when the route has one.
    #[must_use]
    pub const fn parameters(&self) -> Option<&ParameterSet> {
        self.parameters.as_ref()
    }

    /// Runs the route over the tokens that follow its name.
    ///
    /// # Errors
    ///
    /// Returns [`YagclifError::Parse`] when the tokens do not satisfy the
    /// schema, or [`YagclifError::Route`] when the handler fails or panics.
    pub fn invoke(&self, tokens: &[String], env: &dyn EnvLookup) -> Result<(), YagclifError> {
        debug!(tokens = tokens.len(), "invoking route");
        (self.invoke)(tokens, env)
    }

    /// One help line per parameter; empty without a schema.
    #[must_use]
    pub fn help_lines(&self, env: &dyn EnvLookup) -> Vec<String> {
        self.parameters
            .as_ref()
            .map(|set| set.help_lines(env))
            .unwrap_or_default()
    }
}

fn call_handler<E>(handler: impl FnOnce() -> Result<(), E>) -> Result<(), YagclifError>
where
    E: Into<HandlerError>,
{
    match catch_unwind(AssertUnwindSafe(handler)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(RouteError::Handler(err.into()).into()),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(%message, "route handler panicked");
            Err(RouteError::HandlerPanicked { message }.into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
