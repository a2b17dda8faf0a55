//! Deterministic provider selection.

mod mode_order;

pub use mode_order::mode_order;

use recall_core::config::{RerankConfig, RoutingConfig};
use recall_core::models::{
    FeatureFlags, ProviderHealth, ProviderId, ProviderStatusMap, RetrievalRequest, RouteOptions,
    RouteTarget,
};
use tracing::debug;

use crate::rerank::RerankPolicyGuard;

/// Selects exactly one provider per request.
///
/// `route` is a pure function of the request, the feature-flag snapshot, and
/// the provider-health snapshot. The router keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct RetrievalRouter {
    routing: RoutingConfig,
    rerank: RerankConfig,
}

impl RetrievalRouter {
    pub fn new(routing: RoutingConfig, rerank: RerankConfig) -> Self {
        Self { routing, rerank }
    }

    /// Pick a provider and the options that go with it.
    pub fn route(
        &self,
        request: &RetrievalRequest,
        flags: &FeatureFlags,
        status: &ProviderStatusMap,
    ) -> (RouteTarget, RouteOptions) {
        let target = self.select(request, flags, status);
        let guard = RerankPolicyGuard::new(&self.rerank, flags.external_rerank_enabled);
        let options = RouteOptions {
            skip_external_rerank: guard.decide(target).skips_external(),
        };
        (target, options)
    }

    fn select(
        &self,
        request: &RetrievalRequest,
        flags: &FeatureFlags,
        status: &ProviderStatusMap,
    ) -> RouteTarget {
        if let Some(name) = request.provider_override() {
            match ProviderId::parse(name) {
                Some(provider)
                    if flags.is_enabled(provider)
                        && status.health(provider) == ProviderHealth::Available =>
                {
                    return RouteTarget::Provider(provider);
                }
                _ => {
                    debug!(provider_override = name, "override not eligible, applying policy");
                }
            }
        }

        let eligible: Vec<ProviderId> = mode_order(request.mode())
            .iter()
            .copied()
            .filter(|p| flags.is_enabled(*p))
            .collect();

        let first_with = |health: ProviderHealth| {
            eligible
                .iter()
                .copied()
                .find(|p| status.health(*p) == health)
        };

        if let Some(provider) = first_with(ProviderHealth::Available) {
            return RouteTarget::Provider(provider);
        }
        if self.routing.degraded_fallback {
            if let Some(provider) = first_with(ProviderHealth::Degraded) {
                debug!(provider = %provider, "no available provider, falling back to degraded");
                return RouteTarget::Provider(provider);
            }
        }
        RouteTarget::NoProvider
    }
}
