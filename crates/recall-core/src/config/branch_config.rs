use serde::{Deserialize, Serialize};

use super::defaults;

/// Branch classification tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    /// Minimum per-candidate confidence before channel mismatch is considered.
    pub channel_floor: f64,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            channel_floor: defaults::DEFAULT_CHANNEL_FLOOR,
        }
    }
}
