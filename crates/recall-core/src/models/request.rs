use serde::{Deserialize, Serialize};

use super::mode::RetrievalMode;
use crate::config::defaults;
use crate::errors::{RecallResult, RequestError};

/// Immutable retrieval input. Construct through [`RetrievalRequest::new`] or
/// [`RetrievalRequest::builder`]; invalid input is rejected there and never
/// reaches the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRetrievalRequest")]
pub struct RetrievalRequest {
    query: String,
    mode: RetrievalMode,
    top_k: usize,
    threshold: f64,
    provider_override: Option<String>,
}

impl RetrievalRequest {
    /// Request with default mode, `top_k`, and threshold.
    pub fn new(query: impl Into<String>) -> RecallResult<Self> {
        Self::builder(query).build()
    }

    pub fn builder(query: impl Into<String>) -> RetrievalRequestBuilder {
        RetrievalRequestBuilder {
            query: query.into(),
            mode: RetrievalMode::default(),
            top_k: defaults::DEFAULT_TOP_K,
            threshold: defaults::DEFAULT_THRESHOLD,
            provider_override: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> RetrievalMode {
        self.mode
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn provider_override(&self) -> Option<&str> {
        self.provider_override.as_deref()
    }
}

/// Builder for [`RetrievalRequest`].
#[derive(Debug, Clone)]
pub struct RetrievalRequestBuilder {
    query: String,
    mode: RetrievalMode,
    top_k: usize,
    threshold: f64,
    provider_override: Option<String>,
}

impl RetrievalRequestBuilder {
    pub fn mode(mut self, mode: RetrievalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn provider_override(mut self, provider: impl Into<String>) -> Self {
        self.provider_override = Some(provider.into());
        self
    }

    pub fn build(self) -> RecallResult<RetrievalRequest> {
        if self.query.trim().is_empty() {
            return Err(RequestError::EmptyQuery.into());
        }
        if self.top_k == 0 {
            return Err(RequestError::InvalidTopK { top_k: self.top_k }.into());
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RequestError::ThresholdOutOfRange {
                threshold: self.threshold,
            }
            .into());
        }
        let provider_override = self
            .provider_override
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Ok(RetrievalRequest {
            query: self.query,
            mode: self.mode,
            top_k: self.top_k,
            threshold: self.threshold,
            provider_override,
        })
    }
}

#[derive(Deserialize)]
struct RawRetrievalRequest {
    query: String,
    #[serde(default)]
    mode: RetrievalMode,
    #[serde(default = "default_top_k")]
    top_k: usize,
    #[serde(default = "default_threshold")]
    threshold: f64,
    #[serde(default)]
    provider_override: Option<String>,
}

fn default_top_k() -> usize {
    defaults::DEFAULT_TOP_K
}

fn default_threshold() -> f64 {
    defaults::DEFAULT_THRESHOLD
}

impl TryFrom<RawRetrievalRequest> for RetrievalRequest {
    type Error = String;

    fn try_from(raw: RawRetrievalRequest) -> Result<Self, Self::Error> {
        let mut builder = RetrievalRequest::builder(raw.query)
            .mode(raw.mode)
            .top_k(raw.top_k)
            .threshold(raw.threshold);
        if let Some(provider) = raw.provider_override {
            builder = builder.provider_override(provider);
        }
        builder.build().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecallError;

    #[test]
    fn defaults_applied() {
        let req = RetrievalRequest::new("what did we decide about pricing").unwrap();
        assert_eq!(req.mode(), RetrievalMode::Balanced);
        assert_eq!(req.top_k(), 5);
        assert_eq!(req.threshold(), 0.6);
        assert_eq!(req.provider_override(), None);
    }

    #[test]
    fn rejects_blank_query() {
        let err = RetrievalRequest::new("   ").unwrap_err();
        assert!(matches!(
            err,
            RecallError::RequestError(RequestError::EmptyQuery)
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for bad in [-0.1, 1.01, f64::NAN] {
            let err = RetrievalRequest::builder("q").threshold(bad).build().unwrap_err();
            assert_eq!(err.code(), "REQUEST_ERROR");
        }
    }

    #[test]
    fn rejects_zero_top_k() {
        assert!(RetrievalRequest::builder("q").top_k(0).build().is_err());
    }

    #[test]
    fn blank_override_is_dropped() {
        let req = RetrievalRequest::builder("q")
            .provider_override("  ")
            .build()
            .unwrap();
        assert_eq!(req.provider_override(), None);
    }

    #[test]
    fn deserialize_validates() {
        let ok: RetrievalRequest =
            serde_json::from_str(r#"{"query":"hello","mode":"quick"}"#).unwrap();
        assert_eq!(ok.mode(), RetrievalMode::Quick);
        assert_eq!(ok.top_k(), 5);

        let bad = serde_json::from_str::<RetrievalRequest>(r#"{"query":"","top_k":3}"#);
        assert!(bad.is_err());
    }
}
