use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::branch::{ActionKind, BranchCode};
use super::candidate::ContextCandidate;
use super::routing::RoutingMetadata;

/// Aggregate confidence over a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    /// Best confidence present, 0.0 for an empty set.
    pub top_score: f64,
    /// The request threshold, carried for audit.
    pub threshold: f64,
    pub branch: BranchCode,
    pub candidate_count: usize,
    pub threshold_met: bool,
}

impl ConfidenceSummary {
    /// Summarize `candidates` under `threshold`, tagging the result with `branch`.
    pub fn from_candidates(
        candidates: &[ContextCandidate],
        threshold: f64,
        branch: BranchCode,
    ) -> Self {
        let top_score = Self::top_score_of(candidates);
        Self {
            top_score,
            threshold,
            branch,
            candidate_count: candidates.len(),
            threshold_met: !candidates.is_empty() && top_score >= threshold,
        }
    }

    /// Maximum finite confidence across `candidates`, or 0.0 when there is none.
    pub fn top_score_of(candidates: &[ContextCandidate]) -> f64 {
        candidates
            .iter()
            .map(|c| c.confidence)
            .filter(|c| c.is_finite())
            .fold(None, |best: Option<f64>, c| Some(best.map_or(c, |b| b.max(c))))
            .unwrap_or(0.0)
    }
}

/// Retrieval result envelope. Candidate order is the authoritative ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextPacket {
    pub candidates: Vec<ContextCandidate>,
    pub summary: ConfidenceSummary,
    pub provider: String,
    pub rerank_applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    /// RFC 3339 / ISO-8601 construction time.
    pub timestamp: String,
}

impl ContextPacket {
    pub fn new(
        candidates: Vec<ContextCandidate>,
        summary: ConfidenceSummary,
        provider: impl Into<String>,
        rerank_applied: bool,
        fallback_reason: Option<String>,
    ) -> Self {
        Self {
            candidates,
            summary,
            provider: provider.into(),
            rerank_applied,
            fallback_reason,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn branch(&self) -> BranchCode {
        self.summary.branch
    }
}

/// The single, explicit next step paired with every packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAction {
    pub action: ActionKind,
    /// Human-readable guidance.
    pub message: String,
    /// Short machine-readable reason, always populated.
    pub reason: String,
    /// Additional inputs the caller must supply, in order.
    pub inputs_required: Vec<String>,
}

impl NextAction {
    pub fn new(
        action: ActionKind,
        message: impl Into<String>,
        reason: impl Into<String>,
        inputs_required: &[&str],
    ) -> Self {
        Self {
            action,
            message: message.into(),
            reason: reason.into(),
            inputs_required: inputs_required.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level return of one orchestrator call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResponse {
    pub context_packet: ContextPacket,
    pub next_action: NextAction,
    pub routing_metadata: RoutingMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_top_score_is_zero() {
        let summary = ConfidenceSummary::from_candidates(&[], 0.6, BranchCode::EmptySet);
        assert_eq!(summary.top_score, 0.0);
        assert!(!summary.threshold_met);
    }

    #[test]
    fn top_score_is_max_not_first() {
        let candidates = vec![
            ContextCandidate::new("a", "x", "supabase", 0.4),
            ContextCandidate::new("b", "y", "supabase", 0.9),
            ContextCandidate::new("c", "z", "supabase", 0.7),
        ];
        let summary = ConfidenceSummary::from_candidates(&candidates, 0.9, BranchCode::Success);
        assert_eq!(summary.top_score, 0.9);
        assert!(summary.threshold_met);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let summary = ConfidenceSummary::from_candidates(&[], 0.6, BranchCode::EmptySet);
        let packet = ContextPacket::new(vec![], summary, "none", false, None);
        assert!(chrono::DateTime::parse_from_rfc3339(&packet.timestamp).is_ok());
    }
}
