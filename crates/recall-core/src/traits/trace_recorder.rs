use crate::errors::RecallResult;
use crate::models::RetrievalTrace;

/// Sink for retrieval traces. Optional on the orchestrator; when absent,
/// tracing is a no-op.
pub trait ITraceRecorder: Send + Sync {
    /// Record one trace. Errors from downstream hooks propagate to the caller.
    fn record(&self, trace: RetrievalTrace) -> RecallResult<()>;
}
