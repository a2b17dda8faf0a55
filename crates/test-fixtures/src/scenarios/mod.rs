//! Deterministic branch scenarios for validating routing, rerank policy, and
//! branch classification end to end.

mod harness;

pub use harness::{ScenarioHarness, ScenarioOutcome};

use std::collections::BTreeMap;

use recall_core::models::{
    ActionKind, BranchCode, FeatureFlags, ProviderId, ProviderResponse, ProviderResult,
    ProviderStatusMap, RerankType, RetrievalRequest,
};
use serde::Deserialize;

use crate::load_fixture;

/// Catalog location relative to the fixtures root.
pub const CATALOG_PATH: &str = "scenarios/branch_scenarios.json";

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    scenarios: Vec<BranchScenario>,
}

/// One scripted retrieval and the outcome it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchScenario {
    pub id: String,
    pub description: String,
    pub request: RetrievalRequest,
    #[serde(default)]
    pub feature_flags: FeatureFlags,
    #[serde(default)]
    pub provider_status: ProviderStatusMap,
    /// Scripted responses; providers not listed return nothing.
    #[serde(default)]
    pub provider_results: BTreeMap<ProviderId, ScriptedResponse>,
    /// Forced branch; implies validation mode.
    #[serde(default)]
    pub force_branch: Option<BranchCode>,
    pub expected: ScenarioExpectation,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptedResponse {
    #[serde(default)]
    pub results: Vec<ProviderResult>,
    #[serde(default)]
    pub fallback_reason: Option<String>,
}

impl ScriptedResponse {
    pub fn to_response(&self) -> ProviderResponse {
        match &self.fallback_reason {
            Some(reason) => ProviderResponse {
                results: self.results.clone(),
                ..ProviderResponse::degraded(reason.as_str())
            },
            None => ProviderResponse::ok(self.results.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub branch: BranchCode,
    pub action: ActionKind,
    pub rerank_type: RerankType,
    pub selected_provider: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub fallback_reason: Option<String>,
    /// Whether any provider `search` must (or must not) be called.
    #[serde(default)]
    pub provider_called: Option<bool>,
}

impl BranchScenario {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Every way `outcome` departs from the expectation. Empty when it matches.
    pub fn mismatches(&self, outcome: &ScenarioOutcome) -> Vec<String> {
        let expected = &self.expected;
        let response = match &outcome.response {
            Ok(response) => response,
            Err(err) => return vec![format!("{}: run failed: {err}", self.id)],
        };
        let mut problems = Vec::new();
        let mut check = |field: &str, want: String, got: String| {
            if want != got {
                problems.push(format!("{}: {field} expected {want}, got {got}", self.id));
            }
        };

        check(
            "branch",
            expected.branch.to_string(),
            response.context_packet.branch().to_string(),
        );
        check(
            "action",
            expected.action.to_string(),
            response.next_action.action.to_string(),
        );
        check(
            "rerank_type",
            expected.rerank_type.to_string(),
            response.routing_metadata.rerank_type.to_string(),
        );
        check(
            "selected_provider",
            expected.selected_provider.clone(),
            response.routing_metadata.selected_provider.clone(),
        );
        if let Some(reason) = &expected.reason {
            check("reason", reason.clone(), response.next_action.reason.clone());
        }
        if let Some(fallback) = &expected.fallback_reason {
            check(
                "fallback_reason",
                fallback.clone(),
                response
                    .context_packet
                    .fallback_reason
                    .clone()
                    .unwrap_or_default(),
            );
        }
        if let Some(called) = expected.provider_called {
            check(
                "provider_called",
                called.to_string(),
                (outcome.total_provider_calls() > 0).to_string(),
            );
        }
        problems
    }
}

/// Load the full scenario catalog.
///
/// # Panics
/// Panics if the catalog is missing or malformed.
pub fn load_scenarios() -> Vec<BranchScenario> {
    load_fixture::<Catalog>(CATALOG_PATH).scenarios
}

pub fn get_scenario(id: &str) -> Option<BranchScenario> {
    load_scenarios().into_iter().find(|s| s.id == id)
}

pub fn scenarios_with_tag(tag: &str) -> Vec<BranchScenario> {
    load_scenarios()
        .into_iter()
        .filter(|s| s.has_tag(tag))
        .collect()
}
