use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::metadata_keys;

/// Open, string-keyed metadata map. Recognized keys are listed in
/// [`metadata_keys`]; anything else passes through unvalidated.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Raw hit as returned by a provider adapter, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResult {
    pub id: String,
    pub content: String,
    /// Raw similarity score as reported by the provider.
    pub score: f64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ProviderResult {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// One normalized, scored unit of retrieved content.
///
/// Candidates are never modified after construction; a rerank pass produces new
/// candidates through [`ContextCandidate::with_confidence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextCandidate {
    pub id: String,
    pub content: String,
    /// Name of the provider that produced this candidate.
    pub source: String,
    /// Raw similarity from the provider.
    pub base_score: f64,
    /// Confidence in [0, 1], post-rerank when a rerank ran.
    pub confidence: f64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ContextCandidate {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
        base_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            source: source.into(),
            base_score,
            confidence: base_score.clamp(0.0, 1.0),
            metadata: Metadata::new(),
        }
    }

    /// Normalize a provider hit. Returns `None` for hits that cannot become a
    /// usable candidate (blank id or content, non-finite score).
    pub fn from_provider_result(result: &ProviderResult, source: &str) -> Option<Self> {
        if result.id.trim().is_empty()
            || result.content.trim().is_empty()
            || !result.score.is_finite()
        {
            return None;
        }
        Some(Self {
            id: result.id.clone(),
            content: result.content.clone(),
            source: source.to_string(),
            base_score: result.score,
            confidence: result.score.clamp(0.0, 1.0),
            metadata: result.metadata.clone(),
        })
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// New candidate carrying a rescored confidence. The previous confidence is
    /// kept under `original_confidence`.
    pub fn with_confidence(&self, confidence: f64) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.insert(
            metadata_keys::RERANK_ADJUSTED.to_string(),
            serde_json::Value::Bool(true),
        );
        metadata.insert(
            metadata_keys::ORIGINAL_CONFIDENCE.to_string(),
            serde_json::json!(self.confidence),
        );
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            source: self.source.clone(),
            base_score: self.base_score,
            confidence: confidence.clamp(0.0, 1.0),
            metadata,
        }
    }

    /// The `knowledge_type` metadata value, if the provider supplied one.
    pub fn knowledge_type(&self) -> Option<&str> {
        self.metadata
            .get(metadata_keys::KNOWLEDGE_TYPE)
            .and_then(|v| v.as_str())
    }

    /// Usable candidates have content and a finite confidence.
    pub fn is_usable(&self) -> bool {
        !self.content.trim().is_empty() && self.confidence.is_finite()
    }
}
