//! Sub-command registry and dispatcher.
//!
//! An [`App`] maps route names to [`Route`]s. Dispatch reads the argument
//! vector, selects the route named by the first argument after the program
//! name, and hands the remaining tokens to it. Failures are returned, never
//! printed; callers decide how to report them.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use tracing::debug;

use crate::help::{HELP_DOCUMENT_VERSION, HelpDocument, ParameterHelp, RouteHelp};
use crate::{
    DispatchError, EnvLookup, HandlerError, ProcessEnv, Route, RouteError, Schema, YagclifResult,
};

/// A command-line application made of named routes.
///
/// # Examples
///
/// ```
/// use yagclif::{App, HandlerError};
///
/// let mut app = App::new("tool", "does things");
/// app.add_tokens_route("echo", "print the tokens", |tokens| {
///     println!("{}", tokens.join(" "));
///     Ok::<_, HandlerError>(())
/// })
/// .unwrap();
/// app.run_with_args(["tool", "echo", "hi"], false).unwrap();
/// ```
pub struct App {
    name: String,
    description: String,
    routes: BTreeMap<String, Route>,
    env: Box<dyn EnvLookup>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates an application with no routes reading the process environment.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_env(name, description, ProcessEnv)
    }

    /// Creates an application with no routes reading `env:` defaults and help
    /// values from `env`.
    ///
    /// Schema routes validate their defaults against `env` when registered,
    /// so the environment is fixed for the application's lifetime.
    #[must_use]
    pub fn with_env(
        name: impl Into<String>,
        description: impl Into<String>,
        env: impl EnvLookup + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            routes: BTreeMap::new(),
            env: Box::new(env),
        }
    }

    /// Application name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Application description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Registers `route` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateName`] when `name` is taken; the
    /// existing registration is kept.
    pub fn add_route(&mut self, name: impl Into<String>, route: Route) -> Result<(), RouteError> {
        let key = name.into();
        if self.routes.contains_key(&key) {
            return Err(RouteError::DuplicateName { name: key });
        }
        debug!(route = %key, schema = route.has_schema(), "registered route");
        self.routes.insert(key, route);
        Ok(())
    }

    /// Registers a handler that receives the raw tokens after the route name.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateName`] when `name` is taken.
    pub fn add_tokens_route<F, E>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<(), RouteError>
    where
        F: Fn(Vec<String>) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        self.add_route(name, Route::tokens_only(description, handler))
    }

    /// Registers a handler that receives a populated `T` and leftover tokens.
    ///
    /// Defaults are validated against the application's environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::YagclifError::Route`] when `name` is taken, before `T`
    /// is inspected, and [`crate::YagclifError::Schema`] when `T` is not a
    /// valid schema.
    pub fn add_schema_route<T, F, E>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> YagclifResult<()>
    where
        T: Schema + 'static,
        F: Fn(T, Vec<String>) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        let key = name.into();
        if self.routes.contains_key(&key) {
            return Err(RouteError::DuplicateName { name: key }.into());
        }
        let route = Route::with_schema_and_env(description, handler, self.env.as_ref())?;
        self.add_route(key, route)?;
        Ok(())
    }

    /// The route registered under `name`.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Dispatches `args`, whose first element is the program name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when no route is named or the name is
    /// unknown, and the route's error otherwise. With `show_help_on_error`
    /// the error is wrapped in [`crate::YagclifError::WithHelp`].
    pub fn run_with_args<I, S>(&self, args: I, show_help_on_error: bool) -> YagclifResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = args.into_iter().map(Into::into).collect();
        self.dispatch(&argv).map_err(|err| {
            if show_help_on_error {
                err.with_help(self.help())
            } else {
                err
            }
        })
    }

    /// Dispatches the process arguments.
    ///
    /// # Errors
    ///
    /// See [`App::run_with_args`].
    pub fn run(&self, show_help_on_error: bool) -> YagclifResult<()> {
        self.run_with_args(std::env::args(), show_help_on_error)
    }

    fn dispatch(&self, args: &[String]) -> YagclifResult<()> {
        let Some((name, tokens)) = args.get(1..).and_then(<[String]>::split_first) else {
            debug!("no route named");
            return Err(DispatchError::NoActionSelected.into());
        };
        let Some(route) = self.routes.get(name) else {
            debug!(route = %name, "unknown route");
            return Err(DispatchError::ActionNotFound { name: name.clone() }.into());
        };
        debug!(route = %name, tokens = tokens.len(), "dispatching");
        route.invoke(tokens, self.env.as_ref())
    }

    /// Renders help for every route.
    #[must_use]
    pub fn help(&self) -> String {
        let mut out = format!("{}\n{}\n\n", self.name, self.description);
        for (name, route) in &self.routes {
            out.push_str(&format!("\t{name} : {}\n", route.description()));
            if route.has_schema() {
                out.push_str("\t\tusage :\n");
            }
            for line in route.help_lines(self.env.as_ref()) {
                out.push_str(&format!("\t\t\t{line}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Writes [`App::help`] to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_help(&self, writer: &mut impl io::Write) -> io::Result<()> {
        writer.write_all(self.help().as_bytes())
    }

    /// Structured help for tooling.
    #[must_use]
    pub fn help_document(&self) -> HelpDocument {
        let env = self.env.as_ref();
        let routes = self
            .routes
            .iter()
            .map(|(name, route)| RouteHelp {
                name: name.clone(),
                description: route.description().to_owned(),
                parameters: route.parameters().map(|set| {
                    set.iter()
                        .map(|parameter| ParameterHelp::new(parameter, env))
                        .collect()
                }),
            })
            .collect();
        HelpDocument {
            version: HELP_DOCUMENT_VERSION.to_owned(),
            name: self.name.clone(),
            description: self.description.clone(),
            routes,
        }
    }

    /// [`App::help_document`] rendered as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error.
    #[cfg(feature = "serde_json")]
    pub fn help_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.help_document())
    }
}
