//! Runs the branch scenario catalog through a real orchestrator.

use recall_core::models::{BranchCode, TraceStatus};
use test_fixtures::scenarios::{
    get_scenario, load_scenarios, scenarios_with_tag, ScenarioHarness,
};

#[test]
fn catalog_ids_are_unique() {
    let scenarios = load_scenarios();
    let mut ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), scenarios.len());
}

#[test]
fn every_scenario_meets_its_expectation() {
    let mut failures = Vec::new();
    for scenario in load_scenarios() {
        let outcome = ScenarioHarness::run(&scenario);
        failures.extend(scenario.mismatches(&outcome));
    }
    assert!(failures.is_empty(), "scenario failures:\n{}", failures.join("\n"));
}

#[test]
fn catalog_covers_every_branch() {
    let scenarios = load_scenarios();
    for branch in BranchCode::ALL {
        assert!(
            scenarios.iter().any(|s| s.expected.branch == branch),
            "no scenario expects {branch}"
        );
    }
}

#[test]
fn every_run_records_one_ok_trace() {
    for scenario in load_scenarios() {
        let outcome = ScenarioHarness::run(&scenario);
        assert_eq!(outcome.traces.len(), 1, "{}", scenario.id);
        let trace = &outcome.traces[0];
        let response = outcome.response.as_ref().unwrap();
        assert_eq!(trace.status, TraceStatus::Ok);
        assert_eq!(
            response.routing_metadata.trace_id.as_deref(),
            Some(trace.trace_id.as_str())
        );
        assert_eq!(trace.branch_code, Some(response.context_packet.branch()));
        assert_eq!(trace.selected_provider, response.routing_metadata.selected_provider);
    }
}

#[test]
fn replayed_scenario_is_identical() {
    let original = ScenarioHarness::run(&get_scenario("S001").unwrap());
    let replay = ScenarioHarness::run(&get_scenario("S048").unwrap());
    let (a, b) = (original.response.unwrap(), replay.response.unwrap());
    assert_eq!(a.context_packet.candidates, b.context_packet.candidates);
    assert_eq!(a.context_packet.summary, b.context_packet.summary);
    assert_eq!(a.next_action, b.next_action);
}

#[test]
fn unroutable_scenarios_never_call_a_provider() {
    for scenario in load_scenarios()
        .into_iter()
        .filter(|s| s.expected.selected_provider == "none")
    {
        let outcome = ScenarioHarness::run(&scenario);
        assert_eq!(outcome.total_provider_calls(), 0, "{}", scenario.id);
    }
}

#[test]
fn forced_branch_is_recorded() {
    let scenario = get_scenario("S027").unwrap();
    let outcome = ScenarioHarness::run(&scenario);
    let response = outcome.response.unwrap();
    assert!(response.routing_metadata.validation_mode);
    assert_eq!(
        response.routing_metadata.forced_branch,
        Some(BranchCode::ChannelMismatch)
    );
    assert_eq!(outcome.traces[0].forced_branch, Some(BranchCode::ChannelMismatch));
    assert!(outcome.traces[0].validation_mode);
}

#[test]
fn degraded_scenarios_carry_fallback_reason() {
    for scenario in scenarios_with_tag("degraded") {
        let response = ScenarioHarness::run(&scenario).response.unwrap();
        assert!(response.context_packet.branch().is_degraded(), "{}", scenario.id);
        assert!(
            response.context_packet.fallback_reason.is_some(),
            "{} has no fallback_reason",
            scenario.id
        );
    }
}
