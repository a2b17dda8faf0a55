use std::collections::BTreeMap;
use std::sync::Arc;

use recall_core::errors::RecallResult;
use recall_core::models::{ProviderId, RetrievalResponse, RetrievalTrace};
use recall_core::traits::IMemoryProvider;
use recall_observability::TraceCollector;
use recall_retrieval::{RetrievalOrchestrator, TermOverlapReranker};

use super::BranchScenario;
use crate::fakes::{HashEmbedder, ScriptedProvider};

/// What one scenario run produced.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub response: RecallResult<RetrievalResponse>,
    pub provider_calls: BTreeMap<ProviderId, usize>,
    pub traces: Vec<RetrievalTrace>,
}

impl ScenarioOutcome {
    pub fn total_provider_calls(&self) -> usize {
        self.provider_calls.values().sum()
    }
}

/// Runs scenarios through a real orchestrator wired to scripted providers,
/// the term-overlap reranker, and a trace collector.
pub struct ScenarioHarness;

impl ScenarioHarness {
    pub fn run(scenario: &BranchScenario) -> ScenarioOutcome {
        let providers: Vec<Arc<ScriptedProvider>> = ProviderId::ALL
            .into_iter()
            .map(|id| {
                let response = scenario
                    .provider_results
                    .get(&id)
                    .map(|scripted| scripted.to_response())
                    .unwrap_or_default();
                Arc::new(ScriptedProvider::with_response(id, response))
            })
            .collect();
        let collector = Arc::new(TraceCollector::new());

        let mut builder = RetrievalOrchestrator::builder(Arc::new(HashEmbedder::default()))
            .reranker(Arc::new(TermOverlapReranker::new()))
            .trace_recorder(collector.clone())
            .feature_flags(scenario.feature_flags)
            .provider_status(scenario.provider_status.clone());
        for provider in &providers {
            builder = builder.provider(provider.clone());
        }

        let response = builder.build().and_then(|orchestrator| {
            orchestrator.run(
                &scenario.request,
                scenario.force_branch.is_some(),
                scenario.force_branch,
            )
        });

        ScenarioOutcome {
            response,
            provider_calls: providers
                .iter()
                .map(|p| (p.id(), p.call_count()))
                .collect(),
            traces: collector.get_traces(),
        }
    }
}
