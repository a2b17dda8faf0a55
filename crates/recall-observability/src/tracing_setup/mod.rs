//! Tracing setup: structured JSON logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use recall_core::config::defaults::DEFAULT_LOG_LEVEL;
use recall_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "RECALL_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `RECALL_LOG`, defaulting to `info`. Only the first call installs
/// a subscriber.
pub fn init_tracing() {
    install(filter_from_env(DEFAULT_LOG_LEVEL));
}

/// Initialize tracing with `config.log_level` as the fallback filter.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    install(filter_from_env(&config.log_level));
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn filter_from_env(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A subscriber set elsewhere in the process wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
