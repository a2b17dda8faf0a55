//! RetrievalOrchestrator: the composition root.
//!
//! One call runs, strictly in order: route → search → rerank → classify →
//! (forced branch) → assemble and trace. Degraded outcomes come back as branch
//! codes; only unexpected faults leave `run` as errors, after a best-effort
//! error trace.

mod builder;
mod normalize;
pub mod sanitize;

pub use builder::RetrievalOrchestratorBuilder;
pub use normalize::normalize;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use recall_core::config::RecallConfig;
use recall_core::constants::{NONE_PROVIDER, NO_PROVIDER_AVAILABLE};
use recall_core::errors::{RecallError, RecallResult, RetrievalError};
use recall_core::models::{
    duration_ms, BranchCode, ContextCandidate, ContextPacket, FeatureFlags, Metadata, NextAction,
    ProviderId, ProviderStatusMap, RerankMetadata, RerankType, RetrievalRequest,
    RetrievalResponse, RetrievalTrace, RoutingMetadata, TraceStatus,
};
use recall_core::traits::{IMemoryProvider, IQueryEmbedder, IReranker, ITraceRecorder};
use recall_observability::events;
use recall_observability::{provider_search_span, rerank_span, retrieval_span};
use tracing::{debug, warn};

use crate::branch::BranchEngine;
use crate::rerank::RerankPolicyGuard;
use crate::router::RetrievalRouter;

use self::sanitize::sanitize_error_message;

/// Runs retrieval requests against injected collaborators.
///
/// Holds no mutable state; concurrent `run` calls are independent apart from
/// the shared trace recorder.
pub struct RetrievalOrchestrator {
    providers: BTreeMap<ProviderId, Arc<dyn IMemoryProvider>>,
    embedder: Arc<dyn IQueryEmbedder>,
    reranker: Option<Arc<dyn IReranker>>,
    trace_recorder: Option<Arc<dyn ITraceRecorder>>,
    router: RetrievalRouter,
    branch_engine: BranchEngine,
    config: RecallConfig,
    feature_flags: FeatureFlags,
    provider_status: ProviderStatusMap,
}

impl RetrievalOrchestrator {
    pub fn builder(embedder: Arc<dyn IQueryEmbedder>) -> RetrievalOrchestratorBuilder {
        RetrievalOrchestratorBuilder::new(embedder)
    }

    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    pub fn has_trace_recorder(&self) -> bool {
        self.trace_recorder.is_some()
    }

    /// Run `request` against the snapshots given at build time.
    ///
    /// `force_branch` only takes effect when `validation_mode` is set.
    pub fn run(
        &self,
        request: &RetrievalRequest,
        validation_mode: bool,
        force_branch: Option<BranchCode>,
    ) -> RecallResult<RetrievalResponse> {
        self.run_with(
            request,
            &self.feature_flags,
            &self.provider_status,
            validation_mode,
            force_branch,
        )
    }

    /// Run `request` against explicit feature-flag and provider-health snapshots.
    pub fn run_with(
        &self,
        request: &RetrievalRequest,
        flags: &FeatureFlags,
        status: &ProviderStatusMap,
        validation_mode: bool,
        force_branch: Option<BranchCode>,
    ) -> RecallResult<RetrievalResponse> {
        let span = retrieval_span!(request.mode(), request.top_k());
        let _entered = span.enter();
        let started = Instant::now();
        events::query_received(request.query(), request.mode().as_str(), request.top_k());

        let mut trace = self
            .trace_recorder
            .as_ref()
            .map(|_| RetrievalTrace::for_request(request));

        let outcome = self.execute(
            request,
            flags,
            status,
            validation_mode,
            force_branch,
            &mut trace,
        );

        match outcome {
            Ok(mut response) => {
                if let (Some(recorder), Some(mut trace)) = (&self.trace_recorder, trace) {
                    trace.duration_ms = duration_ms(started.elapsed());
                    response.routing_metadata.trace_id = Some(trace.trace_id.clone());
                    recorder.record(trace)?;
                }
                Ok(response)
            }
            Err(err) => {
                events::retrieval_failed(err.error_type(), err.code(), err.retry_hint());
                if let (Some(recorder), Some(mut trace)) = (&self.trace_recorder, trace) {
                    trace.duration_ms = duration_ms(started.elapsed());
                    self.mark_error(&mut trace, &err);
                    if let Err(trace_err) = recorder.record(trace) {
                        warn!(error = %trace_err, "failed to record error trace");
                    }
                }
                Err(err)
            }
        }
    }

    fn execute(
        &self,
        request: &RetrievalRequest,
        flags: &FeatureFlags,
        status: &ProviderStatusMap,
        validation_mode: bool,
        force_branch: Option<BranchCode>,
        trace: &mut Option<RetrievalTrace>,
    ) -> RecallResult<RetrievalResponse> {
        let mode = request.mode();
        let threshold = request.threshold();

        // Step 1: route.
        let (target, options) = self.router.route(request, flags, status);
        let guard = RerankPolicyGuard::new(
            &self.config.rerank,
            flags.external_rerank_enabled && self.reranker.is_some(),
        );
        let rerank = guard.decide(target);
        events::route_selected(target.as_str(), mode.as_str(), options.skip_external_rerank);
        events::rerank_decided(
            target.as_str(),
            rerank.rerank_type.as_str(),
            rerank.rerank_bypass_reason.as_deref(),
        );

        let mut routing_metadata = RoutingMetadata {
            selected_provider: target.as_str().to_string(),
            mode,
            skip_external_rerank: options.skip_external_rerank,
            rerank_type: rerank.rerank_type,
            rerank_bypass_reason: rerank.rerank_bypass_reason.clone(),
            feature_flags_snapshot: flags.snapshot(),
            provider_status_snapshot: status.snapshot(),
            provider_metadata: Metadata::new(),
            trace_id: None,
            validation_mode,
            forced_branch: None,
        };
        if let Some(trace) = trace.as_mut() {
            trace.selected_provider = routing_metadata.selected_provider.clone();
            trace.feature_flags_snapshot = routing_metadata.feature_flags_snapshot.clone();
            trace.provider_status_snapshot = routing_metadata.provider_status_snapshot.clone();
            trace.skip_external_rerank = options.skip_external_rerank;
            trace.rerank_type = rerank.rerank_type;
            trace.rerank_bypass_reason = rerank.rerank_bypass_reason.clone();
            trace.validation_mode = validation_mode;
        }

        let Some(provider_id) = target.provider() else {
            let (summary, next_action) = self.branch_engine.classify(&[], threshold, &rerank, mode);
            let packet = ContextPacket::new(
                Vec::new(),
                summary,
                NONE_PROVIDER,
                false,
                Some(NO_PROVIDER_AVAILABLE.to_string()),
            );
            return Ok(finish(packet, next_action, routing_metadata, 0, trace));
        };

        // Step 2: retrieve.
        let provider = self.providers.get(&provider_id).ok_or_else(|| {
            RetrievalError::ProviderNotRegistered {
                provider: provider_id.to_string(),
            }
        })?;
        let embedding = self.embedder.embed(request.query())?;
        let response = {
            let _search = provider_search_span!(provider_id).entered();
            provider.search(
                &embedding,
                request.top_k(),
                threshold,
                self.config.retrieval.filter_type.as_deref(),
            )
        };
        let provider_fallback = response.fallback_reason().map(str::to_string);
        if let Some(reason) = &provider_fallback {
            events::provider_degraded(provider_id.as_str(), reason);
        }
        let candidates = normalize(&response, provider_id, request.top_k());
        let raw_count = candidates.len();
        routing_metadata.provider_metadata = response.metadata;

        // Step 3: rerank.
        let (final_candidates, rerank_applied) =
            self.apply_rerank(request.query(), candidates, &rerank)?;

        // Step 4: branch.
        let (mut summary, mut next_action) =
            self.branch_engine
                .classify(&final_candidates, threshold, &rerank, mode);

        // Step 5: forced branch, validation harness only.
        match force_branch {
            Some(forced) if validation_mode => {
                (summary, next_action) =
                    self.branch_engine
                        .emit(forced, &final_candidates, threshold, mode);
                routing_metadata.forced_branch = Some(forced);
                if let Some(trace) = trace.as_mut() {
                    trace.forced_branch = Some(forced);
                }
            }
            Some(forced) => {
                debug!(forced_branch = %forced, "force_branch ignored outside validation mode");
            }
            None => {}
        }

        // Step 6: assemble.
        let fallback_reason = summary
            .branch
            .is_degraded()
            .then(|| provider_fallback.unwrap_or_else(|| next_action.reason.clone()));
        let packet = ContextPacket::new(
            final_candidates,
            summary,
            provider_id.as_str(),
            rerank_applied,
            fallback_reason,
        );
        Ok(finish(packet, next_action, routing_metadata, raw_count, trace))
    }

    /// Apply the rerank decision. Returns the final candidates and whether a
    /// rerank (native or external) is reflected in them.
    fn apply_rerank(
        &self,
        query: &str,
        candidates: Vec<ContextCandidate>,
        rerank: &RerankMetadata,
    ) -> RecallResult<(Vec<ContextCandidate>, bool)> {
        match rerank.rerank_type {
            RerankType::Native => {
                let applied = !candidates.is_empty();
                Ok((candidates, applied))
            }
            RerankType::None => Ok((candidates, false)),
            RerankType::External => {
                let Some(reranker) = self.reranker.as_ref() else {
                    return Ok((candidates, false));
                };
                if candidates.is_empty() {
                    return Ok((candidates, false));
                }
                let _rerank = rerank_span!(reranker.name(), candidates.len()).entered();
                let reranked = reranker.rerank(query, &candidates)?;
                check_rerank_contract(reranker.name(), candidates.len(), &reranked)?;
                Ok((reranked, true))
            }
        }
    }

    fn mark_error(&self, trace: &mut RetrievalTrace, err: &RecallError) {
        trace.status = TraceStatus::Error;
        trace.error_type = Some(err.error_type().to_string());
        trace.error_message = Some(sanitize_error_message(
            &err.to_string(),
            self.config.observability.error_message_max_chars,
        ));
    }
}

fn finish(
    packet: ContextPacket,
    next_action: NextAction,
    routing_metadata: RoutingMetadata,
    raw_count: usize,
    trace: &mut Option<RetrievalTrace>,
) -> RetrievalResponse {
    events::branch_classified(
        packet.branch().as_str(),
        next_action.action.as_str(),
        packet.candidates.len(),
        packet.summary.top_score,
    );
    if let Some(trace) = trace.as_mut() {
        trace.raw_candidate_count = raw_count;
        trace.final_candidate_count = packet.candidates.len();
        trace.top_confidence = packet.summary.top_score;
        trace.branch_code = Some(packet.branch());
        trace.action = Some(next_action.action);
        trace.reason = Some(next_action.reason.clone());
    }
    RetrievalResponse {
        context_packet: packet,
        next_action,
        routing_metadata,
    }
}

/// Reranker output must not grow, must hold only usable candidates, and must be
/// ordered by confidence, descending.
fn check_rerank_contract(
    reranker: &str,
    input_len: usize,
    output: &[ContextCandidate],
) -> RecallResult<()> {
    if output.len() > input_len {
        return Err(RetrievalError::RerankContractViolation {
            reranker: reranker.to_string(),
            reason: format!("returned {} candidates for {input_len} inputs", output.len()),
        }
        .into());
    }
    if let Some(bad) = output.iter().find(|c| !c.is_usable()) {
        return Err(RetrievalError::RerankContractViolation {
            reranker: reranker.to_string(),
            reason: format!("returned unusable candidate {}", bad.id),
        }
        .into());
    }
    if output.windows(2).any(|w| w[0].confidence < w[1].confidence) {
        return Err(RetrievalError::RerankContractViolation {
            reranker: reranker.to_string(),
            reason: "candidates not ordered by confidence descending".to_string(),
        }
        .into());
    }
    Ok(())
}
