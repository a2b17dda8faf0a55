//! # recall-observability
//!
//! Bounded in-memory trace collection with summaries and JSON export, plus
//! structured tracing setup, span macros, and named log events.

pub mod trace_collector;
pub mod tracing_setup;

pub use trace_collector::{TraceCallback, TraceCollector, TraceSummary};
pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
