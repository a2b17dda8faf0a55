//! Knowledge-type channels per retrieval mode.

use std::collections::BTreeMap;

use recall_core::models::{ContextCandidate, RetrievalMode};

/// Short-form, conversational knowledge served by quick mode.
pub const QUICK_CHANNEL: &[&str] = &["conversation", "note", "signal", "task"];

/// Long-form, curated knowledge served by precise mode.
pub const PRECISE_CHANNEL: &[&str] = &[
    "document",
    "decision",
    "playbook",
    "case_study",
    "transcript",
];

/// Knowledge types a mode targets. `None` means every type is on-channel.
pub fn channel_for(mode: RetrievalMode) -> Option<&'static [&'static str]> {
    match mode {
        RetrievalMode::Quick => Some(QUICK_CHANNEL),
        RetrievalMode::Balanced => None,
        RetrievalMode::Precise => Some(PRECISE_CHANNEL),
    }
}

/// Evidence that a result set is off-channel for the requested mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelMismatch {
    /// Most frequent off-channel knowledge type.
    pub dominant_type: Option<String>,
    /// Mode whose channel holds `dominant_type`, if any.
    pub suggested_mode: Option<RetrievalMode>,
}

/// Detect a channel mismatch.
///
/// Requires a non-empty set where every candidate is at or above `floor` and a
/// strict majority carry an off-channel `knowledge_type`. Untyped candidates
/// count as on-channel.
pub fn detect(
    candidates: &[ContextCandidate],
    mode: RetrievalMode,
    floor: f64,
) -> Option<ChannelMismatch> {
    let channel = channel_for(mode)?;
    if candidates.is_empty() || candidates.iter().any(|c| !(c.confidence >= floor)) {
        return None;
    }

    let mut off_channel: BTreeMap<&str, usize> = BTreeMap::new();
    for kind in candidates.iter().filter_map(ContextCandidate::knowledge_type) {
        if !channel.contains(&kind) {
            *off_channel.entry(kind).or_default() += 1;
        }
    }
    let off_count: usize = off_channel.values().sum();
    if off_count * 2 <= candidates.len() {
        return None;
    }

    // Alphabetical iteration makes the first-seen maximum the tie-break.
    let mut dominant: Option<(&str, usize)> = None;
    for (kind, count) in off_channel {
        if dominant.map_or(true, |(_, best)| count > best) {
            dominant = Some((kind, count));
        }
    }
    let dominant = dominant.map(|(kind, _)| kind);

    let suggested_mode = dominant.and_then(|kind| {
        [RetrievalMode::Quick, RetrievalMode::Precise]
            .into_iter()
            .filter(|m| *m != mode)
            .find(|m| channel_for(*m).is_some_and(|ch| ch.contains(&kind)))
    });

    Some(ChannelMismatch {
        dominant_type: dominant.map(str::to_string),
        suggested_mode,
    })
}
