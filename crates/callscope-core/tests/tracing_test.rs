//! Tests for the Callscope tracing setup.

use std::sync::Mutex;

use callscope_core::tracing::setup::{init_tracing, LOG_ENV_VAR};

/// Serializes tests that touch CALLSCOPE_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_callscope_log_per_crate_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "callscope_analysis=debug,callscope_io=warn");
    init_tracing();
    tracing::debug!(target: "callscope_analysis", "visible at debug");
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "=[not a filter");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}
