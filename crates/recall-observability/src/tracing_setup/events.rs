//! Structured log events for retrieval decisions and trace bookkeeping.
//!
//! Each function emits a `tracing` event with an `event` field naming it.
//! Query text is only logged at debug level, truncated.

use recall_core::constants::MAX_LOGGED_QUERY_CHARS;

/// Log an incoming query. Debug level only.
pub fn query_received(query: &str, mode: &str, top_k: usize) {
    let preview: String = query.chars().take(MAX_LOGGED_QUERY_CHARS).collect();
    tracing::debug!(
        event = "query_received",
        query = %preview,
        mode = %mode,
        top_k = top_k,
        "query received"
    );
}

/// Log the routing decision.
pub fn route_selected(provider: &str, mode: &str, skip_external_rerank: bool) {
    tracing::info!(
        event = "route_selected",
        provider = %provider,
        mode = %mode,
        skip_external_rerank = skip_external_rerank,
        "route selected"
    );
}

/// Log the rerank policy decision.
pub fn rerank_decided(provider: &str, rerank_type: &str, bypass_reason: Option<&str>) {
    tracing::debug!(
        event = "rerank_decided",
        provider = %provider,
        rerank_type = %rerank_type,
        bypass_reason = bypass_reason.unwrap_or(""),
        "rerank decided"
    );
}

/// Log the terminal branch of a call.
pub fn branch_classified(branch: &str, action: &str, candidates: usize, top_score: f64) {
    tracing::info!(
        event = "branch_classified",
        branch = %branch,
        action = %action,
        candidates = candidates,
        top_score = top_score,
        "branch classified"
    );
}

/// Log a provider that answered with a fallback reason.
pub fn provider_degraded(provider: &str, reason: &str) {
    tracing::warn!(
        event = "provider_degraded",
        provider = %provider,
        reason = %reason,
        "provider degraded"
    );
}

/// Log a stored trace.
pub fn trace_recorded(trace_id: &str, branch: Option<&str>, status: &str) {
    tracing::debug!(
        event = "trace_recorded",
        trace_id = %trace_id,
        branch = branch.unwrap_or(""),
        status = %status,
        "trace recorded"
    );
}

/// Log a trace dropped to keep the buffer within capacity.
pub fn trace_evicted(trace_id: &str, capacity: usize) {
    tracing::debug!(
        event = "trace_evicted",
        trace_id = %trace_id,
        capacity = capacity,
        "trace evicted"
    );
}

/// Log an internal fault leaving the orchestrator.
pub fn retrieval_failed(error_type: &str, code: &str, retryable: bool) {
    tracing::error!(
        event = "retrieval_failed",
        error_type = %error_type,
        code = %code,
        retryable = retryable,
        "retrieval failed"
    );
}
