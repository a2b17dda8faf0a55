use crate::errors::RecallResult;
use crate::models::ContextCandidate;

/// Second scoring pass over already-retrieved candidates.
pub trait IReranker: Send + Sync {
    /// Return at most `candidates.len()` new candidates, ordered by confidence
    /// descending. Inputs are never modified.
    fn rerank(
        &self,
        query: &str,
        candidates: &[ContextCandidate],
    ) -> RecallResult<Vec<ContextCandidate>>;

    /// Human-readable reranker name.
    fn name(&self) -> &str;
}
