//! NextAction construction per branch.

use recall_core::models::{ActionKind, NextAction, RetrievalMode};

use super::channel::ChannelMismatch;

/// Reason strings paired with each branch.
pub mod reasons {
    pub const NO_CANDIDATES_RETURNED: &str = "no_candidates_returned";
    pub const TOP_SCORE_BELOW_THRESHOLD: &str = "top_score_below_threshold";
    pub const KNOWLEDGE_TYPE_OFF_CHANNEL: &str = "knowledge_type_off_channel";
    pub const EXTERNAL_RERANK_BYPASSED: &str = "external_rerank_bypassed";
    pub const RERANKED_CANDIDATES_CONFIDENT: &str = "reranked_candidates_confident";
}

pub fn empty_set() -> NextAction {
    NextAction::new(
        ActionKind::Clarify,
        "I couldn't find anything relevant. Could you add more detail about what you're looking for?",
        reasons::NO_CANDIDATES_RETURNED,
        &["clarified_query"],
    )
}

pub fn low_confidence(top_score: f64, threshold: f64) -> NextAction {
    NextAction::new(
        ActionKind::Clarify,
        format!(
            "Best match scored {top_score:.2}, below your {threshold:.2} threshold. \
             Could you clarify what you're looking for?"
        ),
        reasons::TOP_SCORE_BELOW_THRESHOLD,
        &["clarified_query"],
    )
}

pub fn channel_mismatch(mismatch: &ChannelMismatch, mode: RetrievalMode) -> NextAction {
    match (&mismatch.dominant_type, mismatch.suggested_mode) {
        (Some(kind), Some(suggested)) => NextAction::new(
            ActionKind::SwitchMode,
            format!(
                "Most matches are {kind} entries, which {suggested} mode covers better than \
                 {mode} mode. Try again in {suggested} mode."
            ),
            reasons::KNOWLEDGE_TYPE_OFF_CHANNEL,
            &["mode"],
        ),
        _ => NextAction::new(
            ActionKind::RequestSignal,
            format!(
                "The matches don't fit the kind of knowledge {mode} mode looks for. \
                 Which kind should I search, for example note or document?"
            ),
            reasons::KNOWLEDGE_TYPE_OFF_CHANNEL,
            &["knowledge_type"],
        ),
    }
}

pub fn rerank_bypassed(count: usize) -> NextAction {
    NextAction::new(
        ActionKind::Answer,
        format!("Found {count} relevant {}.", plural(count)),
        reasons::EXTERNAL_RERANK_BYPASSED,
        &[],
    )
}

pub fn success(count: usize) -> NextAction {
    NextAction::new(
        ActionKind::Answer,
        format!("Found {count} relevant {}.", plural(count)),
        reasons::RERANKED_CANDIDATES_CONFIDENT,
        &[],
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "memory"
    } else {
        "memories"
    }
}
