use std::fmt;

use serde::{Deserialize, Serialize};

/// How the final candidate ordering was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RerankType {
    /// Provider-reported scores already reflect a relevance ranking.
    Native,
    /// An external reranker rescored the candidates.
    External,
    #[default]
    None,
}

impl RerankType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::External => "external",
            Self::None => "none",
        }
    }
}

impl fmt::Display for RerankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rerank policy decision for one selected provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RerankMetadata {
    pub rerank_type: RerankType,
    pub rerank_bypass_reason: Option<String>,
}

impl RerankMetadata {
    pub fn native(reason: impl Into<String>) -> Self {
        Self {
            rerank_type: RerankType::Native,
            rerank_bypass_reason: Some(reason.into()),
        }
    }

    pub fn external() -> Self {
        Self {
            rerank_type: RerankType::External,
            rerank_bypass_reason: None,
        }
    }

    pub fn none(reason: impl Into<String>) -> Self {
        Self {
            rerank_type: RerankType::None,
            rerank_bypass_reason: Some(reason.into()),
        }
    }

    /// True when the external reranker must not run for this provider.
    pub fn skips_external(&self) -> bool {
        self.rerank_type == RerankType::Native
    }

    /// True when no external rerank pass is part of the plan, for any reason.
    pub fn external_bypassed(&self) -> bool {
        self.rerank_type != RerankType::External
    }
}
