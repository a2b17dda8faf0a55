/// Rejections raised while constructing a `RetrievalRequest`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("top_k must be positive, got {top_k}")]
    InvalidTopK { top_k: usize },

    #[error("threshold must be within [0, 1], got {threshold}")]
    ThresholdOutOfRange { threshold: f64 },

    #[error("unknown retrieval mode: {mode}")]
    UnknownMode { mode: String },

    #[error("unknown branch code: {code}")]
    UnknownBranch { code: String },
}

impl RequestError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty_query",
            Self::InvalidTopK { .. } => "invalid_top_k",
            Self::ThresholdOutOfRange { .. } => "threshold_out_of_range",
            Self::UnknownMode { .. } => "unknown_mode",
            Self::UnknownBranch { .. } => "unknown_branch",
        }
    }
}
