use std::cmp::Ordering;
use std::collections::HashSet;

use recall_core::errors::RecallResult;
use recall_core::models::ContextCandidate;
use recall_core::traits::IReranker;

/// Confidence boost per query term that also appears in the candidate.
const OVERLAP_BOOST: f64 = 0.05;

/// Deterministic reranker: boosts each candidate by its whitespace-term overlap
/// with the query, then sorts by the boosted confidence.
///
/// Used when no model-backed reranker is configured, and in tests.
#[derive(Debug, Clone, Default)]
pub struct TermOverlapReranker {
    top_k: Option<usize>,
}

impl TermOverlapReranker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `top_k` candidates after rescoring.
    pub fn with_top_k(top_k: usize) -> Self {
        Self { top_k: Some(top_k) }
    }
}

fn terms(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

impl IReranker for TermOverlapReranker {
    fn rerank(
        &self,
        query: &str,
        candidates: &[ContextCandidate],
    ) -> RecallResult<Vec<ContextCandidate>> {
        let query_terms = terms(query);
        let mut rescored: Vec<ContextCandidate> = candidates
            .iter()
            .map(|candidate| {
                let overlap = terms(&candidate.content)
                    .intersection(&query_terms)
                    .count();
                let boosted = (candidate.confidence + overlap as f64 * OVERLAP_BOOST).min(1.0);
                candidate.with_confidence(boosted)
            })
            .collect();

        // Stable sort keeps provider order among equal scores.
        rescored.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(top_k) = self.top_k {
            rescored.truncate(top_k);
        }
        Ok(rescored)
    }

    fn name(&self) -> &str {
        "term-overlap"
    }
}
