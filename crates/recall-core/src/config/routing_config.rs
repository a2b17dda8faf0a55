use serde::{Deserialize, Serialize};

use super::defaults;

/// Routing policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Route to a degraded provider when no available provider remains.
    pub degraded_fallback: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            degraded_fallback: defaults::DEFAULT_DEGRADED_FALLBACK,
        }
    }
}
