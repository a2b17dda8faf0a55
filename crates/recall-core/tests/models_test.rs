use recall_core::models::*;

#[test]
fn branch_codes_are_stable() {
    let codes: Vec<&str> = BranchCode::ALL.iter().map(|b| b.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "EMPTY_SET",
            "LOW_CONFIDENCE",
            "CHANNEL_MISMATCH",
            "RERANK_BYPASSED",
            "SUCCESS"
        ]
    );
    for code in BranchCode::ALL {
        assert_eq!(code.as_str().parse::<BranchCode>().unwrap(), code);
        assert_eq!(serde_json::to_value(code).unwrap(), code.as_str());
    }
}

#[test]
fn ok_is_an_alias_for_success() {
    assert_eq!("OK".parse::<BranchCode>().unwrap(), BranchCode::Success);
    let parsed: BranchCode = serde_json::from_str("\"OK\"").unwrap();
    assert_eq!(parsed, BranchCode::Success);
    assert!("ok".parse::<BranchCode>().is_err());
}

#[test]
fn degraded_branches() {
    assert!(BranchCode::EmptySet.is_degraded());
    assert!(BranchCode::LowConfidence.is_degraded());
    assert!(BranchCode::ChannelMismatch.is_degraded());
    assert!(!BranchCode::RerankBypassed.is_degraded());
    assert!(!BranchCode::Success.is_degraded());
}

#[test]
fn action_kinds_serialize_snake_case() {
    assert_eq!(
        serde_json::to_value(ActionKind::BroadenQuery).unwrap(),
        "broaden_query"
    );
    assert_eq!(
        serde_json::to_value(ActionKind::RequestSignal).unwrap(),
        "request_signal"
    );
}

#[test]
fn missing_provider_status_defaults_to_available() {
    let status = ProviderStatusMap::empty();
    for provider in ProviderId::ALL {
        assert_eq!(status.health(provider), ProviderHealth::Available);
    }
}

#[test]
fn default_snapshots_match_baseline() {
    let flags = FeatureFlags::default();
    assert_eq!(
        flags.enabled_providers(),
        vec![ProviderId::Mem0, ProviderId::Supabase]
    );
    assert!(flags.external_rerank_enabled);

    let status = ProviderStatusMap::default();
    assert_eq!(status.health(ProviderId::Graphiti), ProviderHealth::Unavailable);
    assert_eq!(status.snapshot()["mem0"], "available");
}

#[test]
fn provider_status_map_deserializes_from_plain_json() {
    let status: ProviderStatusMap =
        serde_json::from_str(r#"{"mem0":"degraded","supabase":"unavailable"}"#).unwrap();
    assert_eq!(status.health(ProviderId::Mem0), ProviderHealth::Degraded);
    assert_eq!(status.health(ProviderId::Supabase), ProviderHealth::Unavailable);
    assert_eq!(status.health(ProviderId::Graphiti), ProviderHealth::Available);
}

#[test]
fn degraded_provider_response_carries_reason() {
    let response = ProviderResponse::degraded("provider_error");
    assert!(response.results.is_empty());
    assert_eq!(response.fallback_reason(), Some("provider_error"));
    assert_eq!(ProviderResponse::ok(vec![]).fallback_reason(), None);
}

#[test]
fn routing_metadata_omits_unset_optional_keys() {
    let metadata = RoutingMetadata {
        selected_provider: "none".into(),
        mode: RetrievalMode::Quick,
        skip_external_rerank: false,
        rerank_type: RerankType::None,
        rerank_bypass_reason: None,
        feature_flags_snapshot: FeatureFlags::all_disabled().snapshot(),
        provider_status_snapshot: ProviderStatusMap::empty().snapshot(),
        provider_metadata: Metadata::new(),
        trace_id: None,
        validation_mode: false,
        forced_branch: None,
    };
    let map = metadata.to_map();
    assert_eq!(map["selected_provider"], "none");
    assert_eq!(map["mode"], "quick");
    assert_eq!(map["rerank_type"], "none");
    assert!(!map.contains_key("trace_id"));
    assert!(!map.contains_key("validation_mode"));
    assert!(!map.contains_key("provider_metadata"));
}

#[test]
fn rerank_metadata_policy_helpers() {
    assert!(RerankMetadata::native("provider_native_rerank").skips_external());
    assert!(RerankMetadata::native("provider_native_rerank").external_bypassed());
    assert!(!RerankMetadata::external().external_bypassed());
    assert!(!RerankMetadata::none("rerank_disabled").skips_external());
    assert!(RerankMetadata::none("rerank_disabled").external_bypassed());
}
