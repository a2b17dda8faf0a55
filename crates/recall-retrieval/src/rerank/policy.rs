use recall_core::config::RerankConfig;
use recall_core::models::{ProviderId, RerankMetadata, RouteTarget};

/// Machine-readable reasons recorded when the external reranker is skipped.
pub mod bypass_reasons {
    /// The provider's scores already reflect a relevance ranking.
    pub const PROVIDER_NATIVE_RERANK: &str = "provider_native_rerank";
    /// External reranking is switched off or no reranker is attached.
    pub const RERANK_DISABLED: &str = "rerank_disabled";
    /// Routing selected no provider, so there is nothing to rerank.
    pub const NO_PROVIDER_SELECTED: &str = "no_provider_selected";
}

/// Single decision point for whether a result set is reranked externally.
#[derive(Debug, Clone)]
pub struct RerankPolicyGuard {
    native_providers: Vec<ProviderId>,
    external_available: bool,
}

impl RerankPolicyGuard {
    /// `external_available` is false when external reranking is disabled by
    /// flag or no reranker is attached.
    pub fn new(config: &RerankConfig, external_available: bool) -> Self {
        Self {
            native_providers: config.native_rerank_providers.clone(),
            external_available,
        }
    }

    pub fn is_native(&self, provider: ProviderId) -> bool {
        self.native_providers.contains(&provider)
    }

    pub fn decide(&self, target: RouteTarget) -> RerankMetadata {
        match target {
            RouteTarget::NoProvider => RerankMetadata::none(bypass_reasons::NO_PROVIDER_SELECTED),
            RouteTarget::Provider(provider) if self.is_native(provider) => {
                RerankMetadata::native(bypass_reasons::PROVIDER_NATIVE_RERANK)
            }
            RouteTarget::Provider(_) if self.external_available => RerankMetadata::external(),
            RouteTarget::Provider(_) => RerankMetadata::none(bypass_reasons::RERANK_DISABLED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recall_core::models::RerankType;

    #[test]
    fn native_provider_skips_external() {
        let guard = RerankPolicyGuard::new(&RerankConfig::default(), true);
        let meta = guard.decide(RouteTarget::Provider(ProviderId::Mem0));
        assert_eq!(meta.rerank_type, RerankType::Native);
        assert_eq!(
            meta.rerank_bypass_reason.as_deref(),
            Some("provider_native_rerank")
        );
        assert!(meta.skips_external());
    }

    #[test]
    fn non_native_provider_gets_external() {
        let guard = RerankPolicyGuard::new(&RerankConfig::default(), true);
        let meta = guard.decide(RouteTarget::Provider(ProviderId::Supabase));
        assert_eq!(meta.rerank_type, RerankType::External);
        assert_eq!(meta.rerank_bypass_reason, None);
    }

    #[test]
    fn disabled_external_reports_none() {
        let guard = RerankPolicyGuard::new(&RerankConfig::default(), false);
        let meta = guard.decide(RouteTarget::Provider(ProviderId::Graphiti));
        assert_eq!(meta.rerank_type, RerankType::None);
        assert_eq!(meta.rerank_bypass_reason.as_deref(), Some("rerank_disabled"));
        assert!(!meta.skips_external());
    }

    #[test]
    fn native_wins_even_when_external_disabled() {
        let guard = RerankPolicyGuard::new(&RerankConfig::default(), false);
        let meta = guard.decide(RouteTarget::Provider(ProviderId::Mem0));
        assert_eq!(meta.rerank_type, RerankType::Native);
    }

    #[test]
    fn configurable_native_set() {
        let config = RerankConfig {
            native_rerank_providers: vec![ProviderId::Graphiti],
        };
        let guard = RerankPolicyGuard::new(&config, true);
        assert!(guard.is_native(ProviderId::Graphiti));
        assert_eq!(
            guard.decide(RouteTarget::Provider(ProviderId::Mem0)).rerank_type,
            RerankType::External
        );
    }
}
