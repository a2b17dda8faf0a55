use super::{ConfigError, RequestError, RetrievalError, TraceError};

/// Result alias used across the workspace.
pub type RecallResult<T> = Result<T, RecallError>;

/// Top-level error for the recall system.
///
/// Degraded-but-known retrieval outcomes (no provider, empty results, low
/// confidence) are branch codes, not errors. Only malformed input and
/// unexpected faults end up here.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error("invalid request: {0}")]
    RequestError(#[from] RequestError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("trace error: {0}")]
    TraceError(#[from] TraceError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RecallError {
    /// Stable error code for clients and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequestError(_) => "REQUEST_ERROR",
            Self::RetrievalError(_) => "RETRIEVAL_ERROR",
            Self::ConfigError(_) => "CONFIGURATION_ERROR",
            Self::TraceError(_) => "TRACE_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether retrying the same call might succeed.
    pub fn retry_hint(&self) -> bool {
        matches!(self, Self::RetrievalError(_))
    }

    /// Short variant name recorded as `error_type` on error traces.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::RequestError(e) => e.kind(),
            Self::RetrievalError(e) => e.kind(),
            Self::ConfigError(e) => e.kind(),
            Self::TraceError(e) => e.kind(),
            Self::SerializationError(_) => "serialization_failed",
        }
    }
}
