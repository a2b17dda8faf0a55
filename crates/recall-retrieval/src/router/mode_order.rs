use recall_core::models::{ProviderId, RetrievalMode};

const QUICK: &[ProviderId] = &[ProviderId::Mem0, ProviderId::Supabase];
const BALANCED: &[ProviderId] = &ProviderId::ALL;
const PRECISE: &[ProviderId] = &[ProviderId::Supabase, ProviderId::Mem0, ProviderId::Graphiti];

/// Provider priority for a mode. Quick drops the graph store; precise leads
/// with vector search.
pub fn mode_order(mode: RetrievalMode) -> &'static [ProviderId] {
    match mode {
        RetrievalMode::Quick => QUICK,
        RetrievalMode::Balanced => BALANCED,
        RetrievalMode::Precise => PRECISE,
    }
}
