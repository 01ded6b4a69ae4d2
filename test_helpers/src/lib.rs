//! Test helpers shared across the yagclif workspace.
//!
//! Tests that exercise `env:` defaults against the real process environment
//! use [`env`] to mutate variables under a global lock and restore them
//! afterwards.

pub mod env;
