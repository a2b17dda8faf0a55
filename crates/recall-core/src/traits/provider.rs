use crate::models::{ProviderId, ProviderResponse};

/// A backing memory, vector, or graph store.
///
/// Implementations must not fail across this boundary: on any internal error
/// they return [`ProviderResponse::degraded`] with a `fallback_reason`.
pub trait IMemoryProvider: Send + Sync {
    /// Which provider this adapter serves.
    fn id(&self) -> ProviderId;

    /// Search for the `top_k` best matches at or above `threshold`.
    fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
        threshold: f64,
        filter_type: Option<&str>,
    ) -> ProviderResponse;
}
