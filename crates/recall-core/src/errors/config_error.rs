/// Missing or invalid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ParseFailed { .. } => "config_parse_failed",
            Self::InvalidValue { .. } => "config_invalid_value",
        }
    }
}
