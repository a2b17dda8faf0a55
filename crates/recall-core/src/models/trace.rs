use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::branch::{ActionKind, BranchCode};
use super::mode::RetrievalMode;
use super::request::RetrievalRequest;
use super::rerank::RerankType;
use crate::constants::UNKNOWN_PROVIDER;

/// Outcome status of a traced call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    #[default]
    Ok,
    Error,
}

/// Structured record of one orchestrator call.
///
/// Every field is plain data (strings, numbers, bools, nested maps) so any
/// exporter can consume the JSON form without depending on this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalTrace {
    // Identity
    pub trace_id: String,

    // Timing
    pub timestamp: String,
    pub duration_ms: f64,

    // Request snapshot
    pub query: String,
    pub mode: RetrievalMode,
    pub top_k: usize,
    pub threshold: f64,
    pub provider_override: Option<String>,

    // Routing decision
    pub selected_provider: String,
    pub feature_flags_snapshot: BTreeMap<String, bool>,
    pub provider_status_snapshot: BTreeMap<String, String>,
    pub skip_external_rerank: bool,

    // Retrieval statistics
    pub raw_candidate_count: usize,
    pub final_candidate_count: usize,
    pub top_confidence: f64,

    // Rerank
    pub rerank_type: RerankType,
    pub rerank_bypass_reason: Option<String>,

    // Branch outcome; unset on error traces
    pub branch_code: Option<BranchCode>,
    pub action: Option<ActionKind>,
    pub reason: Option<String>,

    // Validation mode
    pub validation_mode: bool,
    pub forced_branch: Option<BranchCode>,

    // Error channel
    pub status: TraceStatus,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl RetrievalTrace {
    /// Fresh trace with a new id and timestamp, the request snapshot filled in,
    /// and every decision field at its neutral value.
    pub fn for_request(request: &RetrievalRequest) -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            duration_ms: 0.0,
            query: request.query().to_string(),
            mode: request.mode(),
            top_k: request.top_k(),
            threshold: request.threshold(),
            provider_override: request.provider_override().map(str::to_string),
            selected_provider: UNKNOWN_PROVIDER.to_string(),
            feature_flags_snapshot: BTreeMap::new(),
            provider_status_snapshot: BTreeMap::new(),
            skip_external_rerank: false,
            raw_candidate_count: 0,
            final_candidate_count: 0,
            top_confidence: 0.0,
            rerank_type: RerankType::None,
            rerank_bypass_reason: None,
            branch_code: None,
            action: None,
            reason: None,
            validation_mode: false,
            forced_branch: None,
            status: TraceStatus::Ok,
            error_type: None,
            error_message: None,
        }
    }

    /// Error-status trace. `error_message` must already be sanitized.
    pub fn error(
        request: &RetrievalRequest,
        duration: Duration,
        error_type: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            duration_ms: duration_ms(duration),
            status: TraceStatus::Error,
            error_type: Some(error_type.into()),
            error_message: Some(error_message.into()),
            ..Self::for_request(request)
        }
    }

    /// Trace for a call abandoned by a caller-side deadline or cancellation.
    pub fn cancelled(request: &RetrievalRequest, duration: Duration) -> Self {
        Self::error(
            request,
            duration,
            "cancelled",
            "retrieval cancelled before completion",
        )
    }

    pub fn is_error(&self) -> bool {
        self.status == TraceStatus::Error
    }
}

/// Milliseconds as a non-negative float.
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_ids_are_unique() {
        let req = RetrievalRequest::new("q").unwrap();
        let a = RetrievalTrace::for_request(&req);
        let b = RetrievalTrace::for_request(&req);
        assert_ne!(a.trace_id, b.trace_id);
    }

    #[test]
    fn cancelled_trace_is_error_status() {
        let req = RetrievalRequest::new("q").unwrap();
        let trace = RetrievalTrace::cancelled(&req, Duration::from_millis(12));
        assert!(trace.is_error());
        assert_eq!(trace.error_type.as_deref(), Some("cancelled"));
        assert!(trace.duration_ms >= 12.0);
        assert_eq!(trace.branch_code, None);
    }

    #[test]
    fn serializes_to_plain_json() {
        let req = RetrievalRequest::builder("q").provider_override("mem0").build().unwrap();
        let trace = RetrievalTrace::for_request(&req);
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["mode"], "balanced");
        assert_eq!(value["provider_override"], "mem0");
        assert_eq!(value["selected_provider"], "unknown");
    }
}
