// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the query visualisation SQL core
//!
//! This crate provides common testing components including:
//! - SQL fixtures grouped by what the parser and validator should do with them
//! - Parse and validation assertions
//! - Test logging setup

pub mod assertions;
pub mod fixtures;

// Re-exports for convenience
pub use assertions::{SqlAssertions, ValidationAssertions};
pub use fixtures::SqlFixtures;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber once per process.
///
/// Output is controlled by `RUST_LOG`, e.g. `RUST_LOG=queryvis_sql_validation=trace`.
pub fn init_test_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
