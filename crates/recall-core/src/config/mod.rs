pub mod branch_config;
pub mod defaults;
pub mod observability_config;
pub mod rerank_config;
pub mod retrieval_config;
pub mod routing_config;

pub use branch_config::BranchConfig;
pub use observability_config::ObservabilityConfig;
pub use rerank_config::RerankConfig;
pub use retrieval_config::RetrievalConfig;
pub use routing_config::RoutingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RecallResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all subsystem configs.
///
/// Feature flags and provider health are not part of this: they are
/// per-call snapshots passed explicitly to the router.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub retrieval: RetrievalConfig,
    pub routing: RoutingConfig,
    pub rerank: RerankConfig,
    pub branch: BranchConfig,
    pub observability: ObservabilityConfig,
}

impl RecallConfig {
    /// Parse (possibly partial) TOML; missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> RecallResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no subsystem can work with.
    pub fn validate(&self) -> RecallResult<()> {
        if self.retrieval.default_top_k == 0 {
            return Err(invalid("retrieval.default_top_k", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.retrieval.default_threshold) {
            return Err(invalid("retrieval.default_threshold", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.branch.channel_floor) {
            return Err(invalid("branch.channel_floor", "must be within [0, 1]"));
        }
        if self.observability.max_traces == 0 {
            return Err(invalid("observability.max_traces", "must be positive"));
        }
        if self.observability.error_message_max_chars == 0 {
            return Err(invalid(
                "observability.error_message_max_chars",
                "must be positive",
            ));
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                &format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::RecallError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
