//! # recap-observability
//!
//! Subscriber setup driven by [`ObservabilityConfig`](recap_core::config::ObservabilityConfig),
//! one span macro per pipeline operation, and the structured events emitted
//! when a stage degrades (skips, placeholders, sentinels) or stops early.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
