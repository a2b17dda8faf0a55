use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::branch::BranchCode;
use super::candidate::Metadata;
use super::mode::RetrievalMode;
use super::provider::ProviderId;
use super::rerank::RerankType;
use crate::constants::NONE_PROVIDER;

/// Routing outcome: one provider, or the `"none"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTarget {
    Provider(ProviderId),
    NoProvider,
}

impl RouteTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Provider(id) => id.as_str(),
            Self::NoProvider => NONE_PROVIDER,
        }
    }

    pub fn provider(self) -> Option<ProviderId> {
        match self {
            Self::Provider(id) => Some(id),
            Self::NoProvider => None,
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options attached to a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteOptions {
    pub skip_external_rerank: bool,
}

/// Provenance of a response: which provider served it and why.
///
/// Serializes to the open routing-metadata map. Optional keys are omitted
/// when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingMetadata {
    pub selected_provider: String,
    pub mode: RetrievalMode,
    pub skip_external_rerank: bool,
    pub rerank_type: RerankType,
    pub rerank_bypass_reason: Option<String>,
    pub feature_flags_snapshot: BTreeMap<String, bool>,
    pub provider_status_snapshot: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider_metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub validation_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_branch: Option<BranchCode>,
}

impl RoutingMetadata {
    /// Open-map view of this metadata.
    pub fn to_map(&self) -> BTreeMap<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_provider_has_no_id() {
        assert_eq!(RouteTarget::NoProvider.provider(), None);
        assert_eq!(RouteTarget::NoProvider.to_string(), "none");
        let target = RouteTarget::Provider(ProviderId::Supabase);
        assert_eq!(target.provider(), Some(ProviderId::Supabase));
        assert_eq!(target.as_str(), "supabase");
    }
}
