use recall_core::models::{ContextCandidate, ProviderId, ProviderResponse};
use tracing::debug;

/// Turn raw provider hits into candidates, dropping malformed hits and keeping
/// at most `top_k` in provider order.
pub fn normalize(response: &ProviderResponse, provider: ProviderId, top_k: usize) -> Vec<ContextCandidate> {
    let candidates: Vec<ContextCandidate> = response
        .results
        .iter()
        .filter_map(|result| ContextCandidate::from_provider_result(result, provider.as_str()))
        .take(top_k)
        .collect();

    let dropped = response.results.len().saturating_sub(candidates.len());
    if dropped > 0 {
        debug!(
            provider = %provider,
            returned = response.results.len(),
            kept = candidates.len(),
            "dropped malformed or surplus provider results"
        );
    }
    candidates
}
