//! Environment lookup used to resolve `env:` defaults.
//!
//! The engine never reads the process environment directly; it goes through
//! [`EnvLookup`] so callers can substitute a fixed map in tests or embed the
//! parser somewhere the real environment is off limits.

use std::collections::HashMap;

/// Source of environment values keyed by variable name.
pub trait EnvLookup {
    /// Returns the value of `key`, or `None` when it is unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` only when it is set and non-empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment.
///
/// # Examples
///
/// ```
/// use yagclif::{EnvLookup, MapEnv};
/// let env: MapEnv = [("PORT", "8080")].into_iter().collect();
/// assert_eq!(env.get("PORT").as_deref(), Some("8080"));
/// assert_eq!(env.get("HOST"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the updated environment.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvLookup for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}
