//! Tracing/logging setup shared by every binary and test suite.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, init, init_for_tests, init_with};
