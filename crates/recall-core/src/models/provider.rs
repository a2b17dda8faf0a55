use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::candidate::{Metadata, ProviderResult};
use crate::constants::metadata_keys;

/// Backing memory store a request can be routed to.
///
/// Declaration order is the base routing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Managed conversational memory with native relevance ranking.
    Mem0,
    /// pgvector similarity search.
    Supabase,
    /// Temporal knowledge graph. Opt-in.
    Graphiti,
}

impl ProviderId {
    /// All providers in base priority order.
    pub const ALL: [ProviderId; 3] = [Self::Mem0, Self::Supabase, Self::Graphiti];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mem0 => "mem0",
            Self::Supabase => "supabase",
            Self::Graphiti => "graphiti",
        }
    }

    /// Parse a provider name, returning `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mem0" => Ok(Self::Mem0),
            "supabase" => Ok(Self::Supabase),
            "graphiti" => Ok(Self::Graphiti),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Provider availability as reported by health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderHealth {
    #[default]
    Available,
    /// Reachable but impaired. Only used as a last-resort route.
    Degraded,
    Unavailable,
}

impl ProviderHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Degraded => "degraded",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Health snapshot passed explicitly into every routing call.
///
/// Providers missing from the map are treated as available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderStatusMap(BTreeMap<ProviderId, ProviderHealth>);

impl ProviderStatusMap {
    /// An empty snapshot: every provider counts as available.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, provider: ProviderId, health: ProviderHealth) -> Self {
        self.0.insert(provider, health);
        self
    }

    pub fn set(&mut self, provider: ProviderId, health: ProviderHealth) {
        self.0.insert(provider, health);
    }

    pub fn health(&self, provider: ProviderId) -> ProviderHealth {
        self.0.get(&provider).copied().unwrap_or_default()
    }

    /// Plain-data copy for routing metadata and traces.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(id, health)| (id.as_str().to_string(), health.as_str().to_string()))
            .collect()
    }
}

impl Default for ProviderStatusMap {
    fn default() -> Self {
        Self::empty()
            .with(ProviderId::Mem0, ProviderHealth::Available)
            .with(ProviderId::Supabase, ProviderHealth::Available)
            .with(ProviderId::Graphiti, ProviderHealth::Unavailable)
    }
}

impl FromIterator<(ProviderId, ProviderHealth)> for ProviderStatusMap {
    fn from_iter<I: IntoIterator<Item = (ProviderId, ProviderHealth)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Feature-flag snapshot passed explicitly into every routing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub mem0_enabled: bool,
    pub supabase_enabled: bool,
    pub graphiti_enabled: bool,
    pub external_rerank_enabled: bool,
}

impl FeatureFlags {
    /// Every provider and the external reranker switched off.
    pub fn all_disabled() -> Self {
        Self {
            mem0_enabled: false,
            supabase_enabled: false,
            graphiti_enabled: false,
            external_rerank_enabled: false,
        }
    }

    pub fn is_enabled(&self, provider: ProviderId) -> bool {
        match provider {
            ProviderId::Mem0 => self.mem0_enabled,
            ProviderId::Supabase => self.supabase_enabled,
            ProviderId::Graphiti => self.graphiti_enabled,
        }
    }

    /// Enabled providers in base priority order.
    pub fn enabled_providers(&self) -> Vec<ProviderId> {
        ProviderId::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    /// Plain-data copy for routing metadata and traces.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        BTreeMap::from([
            ("mem0_enabled".to_string(), self.mem0_enabled),
            ("supabase_enabled".to_string(), self.supabase_enabled),
            ("graphiti_enabled".to_string(), self.graphiti_enabled),
            (
                "external_rerank_enabled".to_string(),
                self.external_rerank_enabled,
            ),
        ])
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            mem0_enabled: true,
            supabase_enabled: true,
            graphiti_enabled: false,
            external_rerank_enabled: true,
        }
    }
}

/// What a provider hands back from `search`. Providers never fail across this
/// boundary: a failure is an empty result set plus `fallback_reason` metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub results: Vec<ProviderResult>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ProviderResponse {
    pub fn ok(results: Vec<ProviderResult>) -> Self {
        Self {
            results,
            metadata: Metadata::new(),
        }
    }

    /// Empty response for a provider that failed or fell back.
    pub fn degraded(reason: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(
            metadata_keys::FALLBACK_REASON.to_string(),
            serde_json::Value::String(reason.into()),
        );
        Self {
            results: Vec::new(),
            metadata,
        }
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        self.metadata
            .get(metadata_keys::FALLBACK_REASON)
            .and_then(|v| v.as_str())
    }
}
