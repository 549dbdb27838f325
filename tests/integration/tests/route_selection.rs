//! Integration test: route selection between the single-path and
//! multi-path branches, end to end through `Router::find_routes`.

use std::sync::Arc;

use lnpath_core::RouterConfig;
use lnpath_integration_tests::{
    channel_id, priced_probe, probe, route, scenario_request, CallCounts, ScriptedNetwork,
};
use lnpath_routing::{ProbeOutcome, RoutingError};

fn found(channels: &[u32], max_tokens: u64) -> Result<ProbeOutcome, RoutingError> {
    Ok(ProbeOutcome::Found(probe(channels, max_tokens)))
}

/// Capability check succeeds, single path costs 500, two probes find
/// 150_000 and the synthesizer splits the payment for a fee of 300.
fn scenario_network() -> ScriptedNetwork {
    ScriptedNetwork::new()
        .with_single_path(Ok(priced_probe(9, 100_000, 500)))
        .with_multi_path_support(true)
        .with_multi_path_script(vec![found(&[1, 2], 100_000), found(&[3, 4], 50_000)])
        .with_synthesized(Ok(vec![route(1, 60_000, 100), route(3, 40_000, 200)]))
}

// =========================================================================
// Scenarios from the routing contract
// =========================================================================

#[tokio::test]
async fn test_scenario_a_prefers_multi_path() {
    let network = Arc::new(scenario_network());
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 300);
    assert_eq!(result.routes.len(), 2);
    assert_eq!(result.routes[0].hops[0].channel, channel_id(1));
    assert_eq!(CallCounts::get(&network.calls.probe), 1);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 1);
    // Two probes, then the exhausted attempt that ends the loop.
    assert_eq!(CallCounts::get(&network.calls.probe_next), 3);
    // Four distinct channels fetched.
    assert_eq!(CallCounts::get(&network.calls.get_channel), 4);
}

#[tokio::test]
async fn test_scenario_b_multi_path_unsupported() {
    let network = Arc::new(scenario_network().with_multi_path_support(false));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 500);
    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.routes[0].hops[0].channel, channel_id(9));
    assert_eq!(result.routes[0].tokens, 100_500);
    assert_eq!(CallCounts::get(&network.calls.probe_next), 0);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 0);
}

#[tokio::test]
async fn test_scenario_c_over_budget() {
    let network = Arc::new(scenario_network());
    let router = network.router(RouterConfig::default());

    let err = router
        .find_routes(&scenario_request(100))
        .await
        .expect_err("over budget");

    assert_eq!(
        err,
        RoutingError::NoAffordablePathFound {
            fee: Some(300),
            max_fee: 100
        }
    );
    assert_eq!(err.code(), 503);
    assert_eq!(err.reason(), "NoAffordablePathFound");
}

// =========================================================================
// Fallbacks
// =========================================================================

#[tokio::test]
async fn test_pinned_outgoing_channel_skips_multi_path() {
    let network = Arc::new(scenario_network());
    let router = network.router(RouterConfig::default());
    let mut request = scenario_request(1_000);
    request.outgoing_channel = Some(channel_id(9).to_string());

    let result = router.find_routes(&request).await.expect("routes");

    assert_eq!(result.fee, 500);
    assert_eq!(result.routes.len(), 1);
    assert_eq!(CallCounts::get(&network.calls.probe_next), 0);
    assert_eq!(CallCounts::get(&network.calls.get_channel), 0);
}

#[tokio::test]
async fn test_insufficient_capacity_falls_back_to_single_path() {
    let network = Arc::new(
        scenario_network()
            .with_multi_path_script(vec![found(&[1], 60_000), found(&[2], 39_999)]),
    );
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 500);
    assert_eq!(result.routes.len(), 1);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 0);
    assert_eq!(CallCounts::get(&network.calls.get_channel), 0);
}

#[tokio::test]
async fn test_synthesizer_without_routes_falls_back() {
    let network = Arc::new(scenario_network().with_synthesized(Ok(Vec::new())));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 500);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 1);
}

#[tokio::test]
async fn test_channel_lookup_failure_falls_back() {
    let network = Arc::new(scenario_network().with_missing_channel(channel_id(3)));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 500);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 0);
}

#[tokio::test]
async fn test_multi_path_rescues_failed_single_path() {
    let network = Arc::new(
        scenario_network()
            .with_single_path(Err(RoutingError::collaborator("probe", "connection refused"))),
    );
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(result.fee, 300);
    assert_eq!(result.routes.len(), 2);
}

#[tokio::test]
async fn test_both_branches_empty() {
    let network = Arc::new(ScriptedNetwork::new().with_multi_path_support(true));
    let router = network.router(RouterConfig::default());

    let err = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect_err("no routes");

    assert_eq!(
        err,
        RoutingError::NoAffordablePathFound {
            fee: None,
            max_fee: 1_000
        }
    );
    // The accumulator gave up after its first, exhausted attempt.
    assert_eq!(CallCounts::get(&network.calls.probe_next), 1);
}

#[tokio::test]
async fn test_single_path_over_budget() {
    let network = Arc::new(scenario_network().with_multi_path_support(false));
    let router = network.router(RouterConfig::default());

    let err = router
        .find_routes(&scenario_request(499))
        .await
        .expect_err("over budget");

    assert!(matches!(
        err,
        RoutingError::NoAffordablePathFound { fee: Some(500), .. }
    ));
}
