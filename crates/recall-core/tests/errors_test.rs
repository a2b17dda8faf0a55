use recall_core::errors::*;

#[test]
fn request_error_threshold_carries_value() {
    let err = RequestError::ThresholdOutOfRange { threshold: 1.5 };
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn retrieval_error_provider_not_registered_carries_name() {
    let err = RetrievalError::ProviderNotRegistered {
        provider: "graphiti".into(),
    };
    assert!(err.to_string().contains("graphiti"));
}

#[test]
fn rerank_violation_carries_reranker_and_reason() {
    let err = RetrievalError::RerankContractViolation {
        reranker: "term-overlap".into(),
        reason: "returned 4 candidates for 3 inputs".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("term-overlap"));
    assert!(msg.contains("4 candidates"));
}

// --- From impls ---

#[test]
fn request_error_converts_to_recall_error() {
    let err: RecallError = RequestError::EmptyQuery.into();
    assert!(matches!(err, RecallError::RequestError(_)));
    assert_eq!(err.code(), "REQUEST_ERROR");
    assert!(!err.retry_hint());
}

#[test]
fn retrieval_error_converts_and_hints_retry() {
    let err: RecallError = RetrievalError::EmbeddingFailed {
        embedder: "hash".into(),
        reason: "timeout".into(),
    }
    .into();
    assert!(matches!(err, RecallError::RetrievalError(_)));
    assert_eq!(err.code(), "RETRIEVAL_ERROR");
    assert!(err.retry_hint());
    assert_eq!(err.error_type(), "embedding_failed");
}

#[test]
fn trace_error_converts_to_recall_error() {
    let err: RecallError = TraceError::CallbackFailed {
        trace_id: "t-1".into(),
        reason: "exporter down".into(),
    }
    .into();
    assert_eq!(err.code(), "TRACE_ERROR");
    assert_eq!(err.error_type(), "trace_callback_failed");
}

#[test]
fn serialization_error_converts_to_recall_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: RecallError = json_err.into();
    assert!(matches!(err, RecallError::SerializationError(_)));
    assert_eq!(err.code(), "SERIALIZATION_ERROR");
}
