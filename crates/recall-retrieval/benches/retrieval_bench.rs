use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use recall_core::constants::metadata_keys::KNOWLEDGE_TYPE;
use recall_core::models::{
    ContextCandidate, FeatureFlags, ProviderId, ProviderResult, ProviderStatusMap,
    RerankMetadata, RetrievalMode, RetrievalRequest,
};
use recall_core::traits::IReranker;
use recall_observability::TraceCollector;
use recall_retrieval::{BranchEngine, RetrievalOrchestrator, RetrievalRouter, TermOverlapReranker};
use test_fixtures::fakes::{HashEmbedder, ScriptedProvider};

fn provider_results(n: usize) -> Vec<ProviderResult> {
    (0..n)
        .map(|i| {
            ProviderResult::new(
                format!("r{i}"),
                format!("launch planning note number {i} about pricing"),
                1.0 - i as f64 / (n as f64 * 2.0),
            )
            .with_metadata(KNOWLEDGE_TYPE, if i % 3 == 0 { "document" } else { "note" })
        })
        .collect()
}

fn candidates(n: usize) -> Vec<ContextCandidate> {
    provider_results(n)
        .iter()
        .filter_map(|r| ContextCandidate::from_provider_result(r, "supabase"))
        .collect()
}

fn bench_route(c: &mut Criterion) {
    let router = RetrievalRouter::default();
    let request = RetrievalRequest::builder("pricing launch")
        .mode(RetrievalMode::Precise)
        .provider_override("graphiti")
        .build()
        .unwrap();
    let flags = FeatureFlags::default();
    let status = ProviderStatusMap::default();
    c.bench_function("route_precise_with_rejected_override", |b| {
        b.iter(|| router.route(&request, &flags, &status))
    });
}

fn bench_classify(c: &mut Criterion) {
    let engine = BranchEngine::default();
    let rerank = RerankMetadata::external();
    let mut group = c.benchmark_group("classify");
    for n in [5usize, 50, 500] {
        let set = candidates(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| engine.classify(set, 0.6, &rerank, RetrievalMode::Quick))
        });
    }
    group.finish();
}

fn bench_term_overlap_rerank(c: &mut Criterion) {
    let reranker = TermOverlapReranker::new();
    let set = candidates(50);
    c.bench_function("term_overlap_rerank_50", |b| {
        b.iter(|| reranker.rerank("pricing note about launch planning", &set).unwrap())
    });
}

fn bench_orchestrator_run(c: &mut Criterion) {
    let collector = Arc::new(TraceCollector::with_capacity(1000));
    let orchestrator = RetrievalOrchestrator::builder(Arc::new(HashEmbedder::new(64)))
        .provider(Arc::new(ScriptedProvider::new(ProviderId::Mem0, provider_results(10))))
        .provider(Arc::new(ScriptedProvider::new(ProviderId::Supabase, provider_results(10))))
        .reranker(Arc::new(TermOverlapReranker::new()))
        .trace_recorder(collector)
        .build()
        .unwrap();
    let native = RetrievalRequest::new("launch pricing").unwrap();
    let external = RetrievalRequest::builder("launch pricing")
        .provider_override("supabase")
        .build()
        .unwrap();

    c.bench_function("run_native_traced", |b| {
        b.iter(|| orchestrator.run(&native, false, None).unwrap())
    });
    c.bench_function("run_external_traced", |b| {
        b.iter(|| orchestrator.run(&external, false, None).unwrap())
    });
}

criterion_group!(
    benches,
    bench_route,
    bench_classify,
    bench_term_overlap_rerank,
    bench_orchestrator_run
);
criterion_main!(benches);
