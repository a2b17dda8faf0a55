use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Attach a trace collector to the orchestrator.
    pub tracing_enabled: bool,
    /// Trace buffer capacity; oldest traces are evicted first.
    pub max_traces: usize,
    /// Error messages on error traces are truncated to this many characters.
    pub error_message_max_chars: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            tracing_enabled: defaults::DEFAULT_TRACING_ENABLED,
            max_traces: defaults::DEFAULT_MAX_TRACES,
            error_message_max_chars: defaults::DEFAULT_ERROR_MESSAGE_MAX_CHARS,
        }
    }
}
