/// Recall system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provider identifier reported when routing finds no usable provider.
pub const NONE_PROVIDER: &str = "none";

/// Provider identifier recorded on traces whose routing never completed.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Fallback reason recorded when routing selected no provider.
pub const NO_PROVIDER_AVAILABLE: &str = "no_provider_available";

/// Maximum query characters written to debug log events.
pub const MAX_LOGGED_QUERY_CHARS: usize = 100;

/// Recognized candidate metadata keys. Unknown keys pass through untouched.
pub mod metadata_keys {
    pub const KNOWLEDGE_TYPE: &str = "knowledge_type";
    pub const DOCUMENT_ID: &str = "document_id";
    pub const CHUNK_INDEX: &str = "chunk_index";
    pub const SOURCE_ORIGIN: &str = "source_origin";
    /// Set by providers that degraded to an empty result.
    pub const FALLBACK_REASON: &str = "fallback_reason";
    /// Set on candidates produced by an external rerank pass.
    pub const RERANK_ADJUSTED: &str = "rerank_adjusted";
    pub const ORIGINAL_CONFIDENCE: &str = "original_confidence";
}
