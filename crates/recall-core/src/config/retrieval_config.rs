use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::RecallResult;
use crate::models::{RetrievalMode, RetrievalRequest, RetrievalRequestBuilder};

/// Request defaults and provider search options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_top_k: usize,
    pub default_threshold: f64,
    pub default_mode: RetrievalMode,
    /// Optional `filter_type` forwarded to every provider search.
    pub filter_type: Option<String>,
}

impl RetrievalConfig {
    /// Request builder seeded with these defaults.
    pub fn request(&self, query: impl Into<String>) -> RetrievalRequestBuilder {
        RetrievalRequest::builder(query)
            .mode(self.default_mode)
            .top_k(self.default_top_k)
            .threshold(self.default_threshold)
    }

    /// Validated request using these defaults.
    pub fn build_request(&self, query: impl Into<String>) -> RecallResult<RetrievalRequest> {
        self.request(query).build()
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            default_threshold: defaults::DEFAULT_THRESHOLD,
            default_mode: defaults::DEFAULT_MODE.parse().unwrap_or_default(),
            filter_type: None,
        }
    }
}
