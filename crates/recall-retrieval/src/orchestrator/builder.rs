use std::collections::BTreeMap;
use std::sync::Arc;

use recall_core::config::RecallConfig;
use recall_core::errors::RecallResult;
use recall_core::models::{FeatureFlags, ProviderId, ProviderStatusMap};
use recall_core::traits::{IMemoryProvider, IQueryEmbedder, IReranker, ITraceRecorder};

use super::RetrievalOrchestrator;
use crate::branch::BranchEngine;
use crate::router::RetrievalRouter;

/// Assembles a [`RetrievalOrchestrator`] from its collaborators.
pub struct RetrievalOrchestratorBuilder {
    config: RecallConfig,
    embedder: Arc<dyn IQueryEmbedder>,
    providers: BTreeMap<ProviderId, Arc<dyn IMemoryProvider>>,
    reranker: Option<Arc<dyn IReranker>>,
    trace_recorder: Option<Arc<dyn ITraceRecorder>>,
    feature_flags: FeatureFlags,
    provider_status: ProviderStatusMap,
}

impl RetrievalOrchestratorBuilder {
    pub(crate) fn new(embedder: Arc<dyn IQueryEmbedder>) -> Self {
        Self {
            config: RecallConfig::default(),
            embedder,
            providers: BTreeMap::new(),
            reranker: None,
            trace_recorder: None,
            feature_flags: FeatureFlags::default(),
            provider_status: ProviderStatusMap::default(),
        }
    }

    pub fn config(mut self, config: RecallConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an adapter under its own [`IMemoryProvider::id`]. A later
    /// registration for the same id replaces the earlier one.
    pub fn provider(mut self, provider: Arc<dyn IMemoryProvider>) -> Self {
        self.providers.insert(provider.id(), provider);
        self
    }

    pub fn reranker(mut self, reranker: Arc<dyn IReranker>) -> Self {
        self.reranker = Some(reranker);
        self
    }

    pub fn trace_recorder(mut self, recorder: Arc<dyn ITraceRecorder>) -> Self {
        self.trace_recorder = Some(recorder);
        self
    }

    /// Feature-flag snapshot used by [`RetrievalOrchestrator::run`].
    pub fn feature_flags(mut self, flags: FeatureFlags) -> Self {
        self.feature_flags = flags;
        self
    }

    /// Provider-health snapshot used by [`RetrievalOrchestrator::run`].
    pub fn provider_status(mut self, status: ProviderStatusMap) -> Self {
        self.provider_status = status;
        self
    }

    pub fn build(self) -> RecallResult<RetrievalOrchestrator> {
        self.config.validate()?;
        Ok(RetrievalOrchestrator {
            router: RetrievalRouter::new(self.config.routing.clone(), self.config.rerank.clone()),
            branch_engine: BranchEngine::new(&self.config.branch),
            config: self.config,
            embedder: self.embedder,
            providers: self.providers,
            reranker: self.reranker,
            trace_recorder: self.trace_recorder,
            feature_flags: self.feature_flags,
            provider_status: self.provider_status,
        })
    }
}
