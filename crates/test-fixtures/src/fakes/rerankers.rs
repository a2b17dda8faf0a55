use recall_core::errors::{RecallResult, RetrievalError};
use recall_core::models::ContextCandidate;
use recall_core::traits::IReranker;

/// Returns candidates in ascending confidence, breaking the ordering contract.
pub struct ReversingReranker;

impl IReranker for ReversingReranker {
    fn rerank(&self, _query: &str, candidates: &[ContextCandidate]) -> RecallResult<Vec<ContextCandidate>> {
        let mut out = candidates.to_vec();
        out.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
        Ok(out)
    }

    fn name(&self) -> &str {
        "reversing"
    }
}

/// Returns more candidates than it was given, breaking the length contract.
pub struct GrowingReranker;

impl IReranker for GrowingReranker {
    fn rerank(&self, _query: &str, candidates: &[ContextCandidate]) -> RecallResult<Vec<ContextCandidate>> {
        let mut out = candidates.to_vec();
        out.extend(candidates.last().cloned());
        Ok(out)
    }

    fn name(&self) -> &str {
        "growing"
    }
}

/// Fails every call.
pub struct FailingReranker;

impl IReranker for FailingReranker {
    fn rerank(&self, _query: &str, _candidates: &[ContextCandidate]) -> RecallResult<Vec<ContextCandidate>> {
        Err(RetrievalError::RerankFailed {
            reranker: self.name().to_string(),
            reason: "upstream returned 503".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Promotes the best candidate to 0.99 but blanks its content.
pub struct BlankingReranker;

impl IReranker for BlankingReranker {
    fn rerank(&self, _query: &str, candidates: &[ContextCandidate]) -> RecallResult<Vec<ContextCandidate>> {
        let mut out = candidates.to_vec();
        if let Some(first) = out.first_mut() {
            let mut blanked = first.with_confidence(0.99);
            blanked.content = "   ".to_string();
            *first = blanked;
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "blanking"
    }
}

/// Rescores the last candidate to NaN.
pub struct NanReranker;

impl IReranker for NanReranker {
    fn rerank(&self, _query: &str, candidates: &[ContextCandidate]) -> RecallResult<Vec<ContextCandidate>> {
        let mut out = candidates.to_vec();
        if let Some(last) = out.last_mut() {
            *last = last.with_confidence(f64::NAN);
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "nan"
    }
}
