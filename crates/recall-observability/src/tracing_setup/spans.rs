//! Span definitions per retrieval stage.

/// Create the span wrapping one orchestrator call.
#[macro_export]
macro_rules! retrieval_span {
    ($mode:expr, $top_k:expr) => {
        tracing::info_span!("recall.retrieval", mode = %$mode, top_k = $top_k)
    };
}

/// Create a provider search span.
#[macro_export]
macro_rules! provider_search_span {
    ($provider:expr) => {
        tracing::debug_span!("recall.provider_search", provider = %$provider)
    };
}

/// Create an external rerank span.
#[macro_export]
macro_rules! rerank_span {
    ($reranker:expr, $candidates:expr) => {
        tracing::debug_span!("recall.rerank", reranker = %$reranker, candidates = $candidates)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "recall.retrieval";
    pub const PROVIDER_SEARCH: &str = "recall.provider_search";
    pub const RERANK: &str = "recall.rerank";
}
