//! Unit tests for environment guards.

#![expect(
    clippy::expect_used,
    reason = "tests panic to surface broken fixtures"
)]

use super::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn read(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[test]
fn set_var_restores_the_prior_value() {
    let key = "YAGCLIF_HELPERS_SET";
    let _base = set_var(key, "base");
    {
        let _temp = set_var(key, "temp");
        assert_eq!(read(key).as_deref(), Some("temp"));
    }
    assert_eq!(read(key).as_deref(), Some("base"));
}

#[test]
fn set_var_unsets_a_previously_absent_key() {
    let key = "YAGCLIF_HELPERS_ABSENT";
    let _clear = remove_var(key);
    {
        let _temp = set_var(key, "temp");
        assert_eq!(read(key).as_deref(), Some("temp"));
    }
    assert_eq!(read(key), None);
}

#[test]
fn remove_var_restores_the_value() {
    let key = "YAGCLIF_HELPERS_REMOVE";
    let _base = set_var(key, "kept");
    {
        let _gone = remove_var(key);
        assert_eq!(read(key), None);
    }
    assert_eq!(read(key).as_deref(), Some("kept"));
}

#[test]
fn stacked_guards_unwind_in_lifo_order() {
    let key = "YAGCLIF_HELPERS_STACK";
    let _clear = remove_var(key);
    let first = set_var(key, "v1");
    let second = set_var(key, "v2");
    assert_eq!(read(key).as_deref(), Some("v2"));
    drop(second);
    assert_eq!(read(key).as_deref(), Some("v1"));
    drop(first);
    assert_eq!(read(key), None);
}

#[test]
fn scope_restores_every_guard() {
    let (set, removed) = ("YAGCLIF_HELPERS_SCOPE_SET", "YAGCLIF_HELPERS_SCOPE_REMOVED");
    let _base = set_var(removed, "present");
    {
        let _scope = scope(|lock| vec![lock.set_var(set, "on"), lock.remove_var(removed)]);
        assert_eq!(read(set).as_deref(), Some("on"));
        assert_eq!(read(removed), None);
    }
    assert_eq!(read(set), None);
    assert_eq!(read(removed).as_deref(), Some("present"));
}

#[test]
fn distinct_keys_mutate_concurrently() {
    const THREADS: usize = 4;
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let start = Arc::clone(&barrier);
            thread::spawn(move || {
                let key = format!("YAGCLIF_HELPERS_THREAD_{i}");
                start.wait();
                for round in 0..8 {
                    let value = format!("{i}-{round}");
                    let guard = set_var(&key, &value);
                    assert_eq!(read(&key), Some(value));
                    drop(guard);
                }
                assert_eq!(read(&key), None);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
