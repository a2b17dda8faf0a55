//! Branch/fallback state machine.
//!
//! Classifies a finished retrieval into exactly one terminal [`BranchCode`],
//! evaluated in the fixed order
//! `EMPTY_SET → LOW_CONFIDENCE → CHANNEL_MISMATCH → RERANK_BYPASSED → SUCCESS`.
//! The first matching predicate wins.

pub mod actions;
pub mod channel;

use recall_core::config::BranchConfig;
use recall_core::models::{
    BranchCode, ConfidenceSummary, ContextCandidate, NextAction, RerankMetadata, RetrievalMode,
};

/// Pure classifier over a final candidate set. Holds only configuration.
#[derive(Debug, Clone)]
pub struct BranchEngine {
    channel_floor: f64,
}

impl Default for BranchEngine {
    fn default() -> Self {
        Self::new(&BranchConfig::default())
    }
}

impl BranchEngine {
    pub fn new(config: &BranchConfig) -> Self {
        Self {
            channel_floor: config.channel_floor,
        }
    }

    /// Classify `candidates` and pair the branch with its next action.
    pub fn classify(
        &self,
        candidates: &[ContextCandidate],
        threshold: f64,
        rerank: &RerankMetadata,
        mode: RetrievalMode,
    ) -> (ConfidenceSummary, NextAction) {
        let usable: Vec<ContextCandidate> = candidates
            .iter()
            .filter(|c| c.is_usable())
            .cloned()
            .collect();
        let top_score = ConfidenceSummary::top_score_of(&usable);

        let (branch, action) = if usable.is_empty() {
            (BranchCode::EmptySet, actions::empty_set())
        } else if top_score < threshold {
            (
                BranchCode::LowConfidence,
                actions::low_confidence(top_score, threshold),
            )
        } else if let Some(mismatch) = channel::detect(&usable, mode, self.channel_floor) {
            (
                BranchCode::ChannelMismatch,
                actions::channel_mismatch(&mismatch, mode),
            )
        } else if rerank.external_bypassed() {
            (
                BranchCode::RerankBypassed,
                actions::rerank_bypassed(usable.len()),
            )
        } else {
            (BranchCode::Success, actions::success(usable.len()))
        };

        (
            ConfidenceSummary::from_candidates(&usable, threshold, branch),
            action,
        )
    }

    /// Emit `branch` for `candidates` regardless of what `classify` would pick.
    /// Only the validation harness forces branches.
    pub fn emit(
        &self,
        branch: BranchCode,
        candidates: &[ContextCandidate],
        threshold: f64,
        mode: RetrievalMode,
    ) -> (ConfidenceSummary, NextAction) {
        let summary = ConfidenceSummary::from_candidates(candidates, threshold, branch);
        let action = match branch {
            BranchCode::EmptySet => actions::empty_set(),
            BranchCode::LowConfidence => actions::low_confidence(summary.top_score, threshold),
            BranchCode::ChannelMismatch => {
                let mismatch = channel::detect(candidates, mode, self.channel_floor)
                    .unwrap_or_default();
                actions::channel_mismatch(&mismatch, mode)
            }
            BranchCode::RerankBypassed => actions::rerank_bypassed(candidates.len()),
            BranchCode::Success => actions::success(candidates.len()),
        };
        (summary, action)
    }
}
