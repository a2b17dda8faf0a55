/// Trace recording failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraceError {
    #[error("trace callback failed for {trace_id}: {reason}")]
    CallbackFailed { trace_id: String, reason: String },

    #[error("trace buffer lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}

impl TraceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CallbackFailed { .. } => "trace_callback_failed",
            Self::LockPoisoned { .. } => "trace_lock_poisoned",
        }
    }
}
