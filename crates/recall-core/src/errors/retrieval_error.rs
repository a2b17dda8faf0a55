/// Unexpected faults inside the retrieval pipeline.
///
/// Provider failures are not listed here: providers report them as an empty
/// result with a `fallback_reason`.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no adapter registered for routed provider {provider}")]
    ProviderNotRegistered { provider: String },

    #[error("query embedding failed via {embedder}: {reason}")]
    EmbeddingFailed { embedder: String, reason: String },

    #[error("reranker {reranker} violated its contract: {reason}")]
    RerankContractViolation { reranker: String, reason: String },

    #[error("rerank failed via {reranker}: {reason}")]
    RerankFailed { reranker: String, reason: String },
}

impl RetrievalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProviderNotRegistered { .. } => "provider_not_registered",
            Self::EmbeddingFailed { .. } => "embedding_failed",
            Self::RerankContractViolation { .. } => "rerank_contract_violation",
            Self::RerankFailed { .. } => "rerank_failed",
        }
    }
}
