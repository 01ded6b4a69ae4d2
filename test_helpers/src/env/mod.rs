//! Scoped mutation of process environment variables.
//!
//! Every mutation takes a process-wide re-entrant mutex and returns an
//! [`EnvVarGuard`] that puts the variable back when dropped: the previous
//! value is restored, or the variable is removed if it was unset.
//!
//! Guards for one key nest and unwind in LIFO order. The mutex is only held
//! while a variable is being changed; tests that read several variables
//! while other threads may be writing should hold [`lock`] or an
//! [`EnvScope`] for their whole body. Tests in the same binary that touch
//! the environment should additionally be marked `#[serial]`.
//!
//! # Examples
//!
//! ```
//! use yagclif_test_helpers::env;
//!
//! let _port = env::set_var("YAGCLIF_DOC_PORT", "8080");
//! assert_eq!(std::env::var("YAGCLIF_DOC_PORT").as_deref(), Ok("8080"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Restores one environment variable on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _held = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the environment mutex until dropped.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    held: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets `key` under this lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        // SAFETY: `self.held` keeps `ENV_MUTEX` locked.
        mutate(key.into(), &self.held, |key| unsafe { env::set_var(key, value) })
    }

    /// Removes `key` under this lock.
    pub fn remove_var<K: Into<String>>(&self, key: K) -> EnvVarGuard {
        // SAFETY: `self.held` keeps `ENV_MUTEX` locked.
        mutate(key.into(), &self.held, |key| unsafe { env::remove_var(key) })
    }
}

/// Holds the environment mutex and a set of guards.
///
/// On drop the guards are restored first, while the lock is still held.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

fn mutate(
    key: String,
    _held: &ReentrantMutexGuard<'static, ()>,
    change: impl FnOnce(&str),
) -> EnvVarGuard {
    let original = env::var_os(&key);
    change(&key);
    EnvVarGuard { key, original }
}

/// Sets `key` to `value` until the returned guard drops.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes `key` until the returned guard drops.
pub fn remove_var<K: Into<String>>(key: K) -> EnvVarGuard {
    lock().remove_var(key)
}

/// Acquires the environment mutex.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        held: ENV_MUTEX.lock(),
    }
}

/// Builds guards with `builder` and keeps the lock for the scope's lifetime.
///
/// # Examples
///
/// ```
/// use yagclif_test_helpers::env;
///
/// let _scope = env::scope(|lock| {
///     vec![
///         lock.set_var("YAGCLIF_DOC_HOST", "localhost"),
///         lock.remove_var("YAGCLIF_DOC_TOKEN"),
///     ]
/// });
/// assert!(std::env::var("YAGCLIF_DOC_TOKEN").is_err());
/// ```
pub fn scope<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    let lock = lock();
    let guards = builder(&lock);
    EnvScope {
        guards,
        _lock: lock,
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

#[cfg(test)]
mod tests;
