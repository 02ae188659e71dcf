//! # brandrec-observability
//!
//! Structured logging for brandrec: a one-time `tracing` subscriber setup
//! driven by `ObservabilityConfig`, plus the span macros and field names the
//! other crates log with.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
