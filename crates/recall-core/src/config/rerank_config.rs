use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ProviderId;

/// Rerank policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Providers whose scores already reflect a relevance ranking.
    pub native_rerank_providers: Vec<ProviderId>,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            native_rerank_providers: defaults::DEFAULT_NATIVE_RERANK_PROVIDERS
                .iter()
                .filter_map(|name| ProviderId::parse(name))
                .collect(),
        }
    }
}
