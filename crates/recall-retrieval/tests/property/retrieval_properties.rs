use std::sync::Arc;

use proptest::prelude::*;
use recall_core::constants::metadata_keys::KNOWLEDGE_TYPE;
use recall_core::models::{
    BranchCode, ContextCandidate, FeatureFlags, ProviderHealth, ProviderId, ProviderResult,
    ProviderStatusMap, RerankMetadata, RetrievalMode, RetrievalRequest, RouteTarget,
};
use recall_core::traits::IReranker;
use recall_retrieval::{BranchEngine, RetrievalOrchestrator, RetrievalRouter, TermOverlapReranker};
use test_fixtures::fakes::{HashEmbedder, ScriptedProvider};

const KNOWLEDGE_TYPES: &[&str] = &[
    "conversation",
    "note",
    "signal",
    "task",
    "document",
    "decision",
    "playbook",
    "case_study",
    "transcript",
    "recommendation",
];

fn mode() -> impl Strategy<Value = RetrievalMode> {
    prop::sample::select(RetrievalMode::ALL.to_vec())
}

fn health() -> impl Strategy<Value = ProviderHealth> {
    prop::sample::select(vec![
        ProviderHealth::Available,
        ProviderHealth::Degraded,
        ProviderHealth::Unavailable,
    ])
}

fn flags() -> impl Strategy<Value = FeatureFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(m, s, g, r)| {
        FeatureFlags {
            mem0_enabled: m,
            supabase_enabled: s,
            graphiti_enabled: g,
            external_rerank_enabled: r,
        }
    })
}

fn status() -> impl Strategy<Value = ProviderStatusMap> {
    (health(), health(), prop::option::of(health())).prop_map(|(m, s, g)| {
        let mut map = ProviderStatusMap::empty()
            .with(ProviderId::Mem0, m)
            .with(ProviderId::Supabase, s);
        if let Some(g) = g {
            map.set(ProviderId::Graphiti, g);
        }
        map
    })
}

fn request() -> impl Strategy<Value = RetrievalRequest> {
    let override_name = prop::option::of(prop::sample::select(vec![
        "mem0", "supabase", "graphiti", "pinecone",
    ]));
    ("[a-z ]{1,40}", mode(), 1usize..20, 0.0f64..=1.0, override_name).prop_filter_map(
        "blank query",
        |(query, mode, top_k, threshold, provider)| {
            let mut builder = RetrievalRequest::builder(query)
                .mode(mode)
                .top_k(top_k)
                .threshold(threshold);
            if let Some(p) = provider {
                builder = builder.provider_override(p);
            }
            builder.build().ok()
        },
    )
}

fn candidate() -> impl Strategy<Value = ContextCandidate> {
    let confidence = prop_oneof![
        8 => 0.0f64..=1.0,
        1 => Just(f64::NAN),
    ];
    (
        "[a-z]{0,12}",
        confidence,
        prop::option::of(prop::sample::select(KNOWLEDGE_TYPES.to_vec())),
    )
        .prop_map(|(content, confidence, kind)| {
            let mut c = ContextCandidate::new("id", content, "mem0", 0.0);
            c.confidence = confidence;
            match kind {
                Some(kind) => c.with_metadata(KNOWLEDGE_TYPE, kind),
                None => c,
            }
        })
}

fn rerank_metadata() -> impl Strategy<Value = RerankMetadata> {
    prop_oneof![
        Just(RerankMetadata::native("provider_native_rerank")),
        Just(RerankMetadata::external()),
        Just(RerankMetadata::none("rerank_disabled")),
    ]
}

proptest! {
    #[test]
    fn routing_is_deterministic(req in request(), flags in flags(), status in status()) {
        let router = RetrievalRouter::default();
        let first = router.route(&req, &flags, &status);
        for _ in 0..3 {
            prop_assert_eq!(router.route(&req, &flags, &status), first);
        }
    }

    #[test]
    fn routing_only_picks_usable_providers(req in request(), flags in flags(), status in status()) {
        let (target, options) = RetrievalRouter::default().route(&req, &flags, &status);
        match target {
            RouteTarget::Provider(p) => {
                prop_assert!(flags.is_enabled(p));
                prop_assert_ne!(status.health(p), ProviderHealth::Unavailable);
                prop_assert_eq!(options.skip_external_rerank, p == ProviderId::Mem0);
            }
            RouteTarget::NoProvider => prop_assert!(!options.skip_external_rerank),
        }
    }

    #[test]
    fn classification_is_complete(
        candidates in prop::collection::vec(candidate(), 0..8),
        threshold in 0.0f64..=1.0,
        rerank in rerank_metadata(),
        mode in mode(),
    ) {
        let (summary, action) = BranchEngine::default().classify(&candidates, threshold, &rerank, mode);
        prop_assert!(BranchCode::ALL.contains(&summary.branch));
        prop_assert!(!action.reason.is_empty());
        prop_assert!(!action.message.is_empty());
        let usable = candidates.iter().filter(|c| c.is_usable()).count();
        prop_assert_eq!(summary.branch == BranchCode::EmptySet, usable == 0);
    }

    #[test]
    fn top_score_is_max_usable_confidence(
        candidates in prop::collection::vec(candidate(), 0..8),
        threshold in 0.0f64..=1.0,
    ) {
        let (summary, _) = BranchEngine::default().classify(
            &candidates,
            threshold,
            &RerankMetadata::external(),
            RetrievalMode::Balanced,
        );
        let usable: Vec<f64> = candidates
            .iter()
            .filter(|c| c.is_usable())
            .map(|c| c.confidence)
            .collect();
        if usable.is_empty() {
            prop_assert_eq!(summary.top_score, 0.0);
        } else {
            let max = usable.iter().copied().fold(f64::MIN, f64::max);
            prop_assert_eq!(summary.top_score, max);
            prop_assert_eq!(summary.threshold_met, max >= threshold);
        }
    }

    #[test]
    fn rerank_never_grows_and_sorts(
        query in "[a-z ]{0,30}",
        candidates in prop::collection::vec(candidate(), 0..10),
    ) {
        let usable: Vec<ContextCandidate> = candidates.into_iter().filter(|c| c.is_usable()).collect();
        let out = TermOverlapReranker::new().rerank(&query, &usable).unwrap();
        prop_assert!(out.len() <= usable.len());
        prop_assert!(out.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn final_count_never_exceeds_raw_count(
        scores in prop::collection::vec(0.0f64..=1.0, 0..12),
        top_k in 1usize..8,
    ) {
        let results: Vec<ProviderResult> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| ProviderResult::new(format!("r{i}"), format!("content {i}"), *s))
            .collect();
        let collector = Arc::new(recall_observability::TraceCollector::new());
        let orchestrator = RetrievalOrchestrator::builder(Arc::new(HashEmbedder::default()))
            .provider(Arc::new(ScriptedProvider::new(ProviderId::Supabase, results)))
            .reranker(Arc::new(TermOverlapReranker::new()))
            .trace_recorder(collector.clone())
            .build()
            .unwrap();
        let req = RetrievalRequest::builder("content")
            .top_k(top_k)
            .provider_override("supabase")
            .build()
            .unwrap();
        let response = orchestrator.run(&req, false, None).unwrap();
        let trace = collector.get_latest(1).remove(0);
        prop_assert!(trace.raw_candidate_count <= top_k);
        prop_assert!(trace.final_candidate_count <= trace.raw_candidate_count);
        prop_assert_eq!(response.context_packet.candidates.len(), trace.final_candidate_count);
    }
}
