//! Integration test: the multi-path accumulation loop as driven by the router.

use std::sync::Arc;

use lnpath_core::RouterConfig;
use lnpath_integration_tests::{
    destination, key, priced_probe, probe, route, scenario_request, CallCounts, ScriptedNetwork,
};
use lnpath_routing::{Ignore, IgnoreEntry, ProbeOutcome, RoutingError};

fn endless_script(count: usize) -> Vec<Result<ProbeOutcome, RoutingError>> {
    (0..count)
        .map(|i| Ok(ProbeOutcome::Found(probe(&[i as u32 + 1], 20_000))))
        .collect()
}

fn network(script: Vec<Result<ProbeOutcome, RoutingError>>) -> ScriptedNetwork {
    ScriptedNetwork::new()
        .with_single_path(Ok(priced_probe(99, 100_000, 500)))
        .with_multi_path_support(true)
        .with_multi_path_script(script)
        .with_synthesized(Ok(vec![route(1, 100_000, 70)]))
}

#[tokio::test]
async fn test_default_budget_caps_probes_at_seven() {
    let network = Arc::new(network(endless_script(20)));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(CallCounts::get(&network.calls.probe_next), 7);
    // 7 * 20_000 covers 100_000, so multi-path routes are used.
    assert_eq!(result.fee, 70);
    assert_eq!(
        *network.seen_probe_counts.lock().unwrap(),
        vec![0, 1, 2, 3, 4, 5, 6]
    );
}

#[tokio::test]
async fn test_request_budget_caps_probes() {
    let network = Arc::new(network(endless_script(20)));
    let router = network.router(RouterConfig::default());
    let mut request = scenario_request(1_000);
    request.max_paths = Some(3);

    let result = router.find_routes(&request).await.expect("routes");

    assert_eq!(CallCounts::get(&network.calls.probe_next), 3);
    // 3 * 20_000 does not cover 100_000: single path wins.
    assert_eq!(result.fee, 500);
}

#[tokio::test]
async fn test_configured_budget_caps_probes() {
    let network = Arc::new(network(endless_script(20)));
    let router = network.router(RouterConfig {
        max_paths: 5,
        ..Default::default()
    });

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(CallCounts::get(&network.calls.probe_next), 5);
    assert_eq!(result.fee, 70);
}

#[tokio::test]
async fn test_soft_failure_ends_loop_immediately() {
    let mut script = endless_script(2);
    script.push(Ok(ProbeOutcome::Exhausted {
        reason: "NoPathFound".into(),
    }));
    script.extend(endless_script(5));
    let network = Arc::new(network(script));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(CallCounts::get(&network.calls.probe_next), 3);
    // Only 40_000 discovered: falls back to the single path.
    assert_eq!(result.fee, 500);
}

#[tokio::test]
async fn test_hard_failure_ends_loop_and_branch() {
    let mut script = endless_script(6);
    script.insert(
        1,
        Err(RoutingError::collaborator("probe_next", "connection reset")),
    );
    let network = Arc::new(network(script));
    let router = network.router(RouterConfig::default());

    let result = router
        .find_routes(&scenario_request(1_000))
        .await
        .expect("routes");

    assert_eq!(CallCounts::get(&network.calls.probe_next), 2);
    assert_eq!(CallCounts::get(&network.calls.synthesize), 0);
    assert_eq!(result.fee, 500);
}

#[tokio::test]
async fn test_one_router_serves_concurrent_requests() {
    let network = Arc::new(network(endless_script(14)));
    let router = network.router(RouterConfig::default());

    let full = scenario_request(1_000);
    let mut capped = scenario_request(1_000);
    capped.max_paths = Some(3);
    let (a, b) = tokio::join!(router.find_routes(&full), router.find_routes(&capped));

    // 7 * 20_000 covers the amount; 3 * 20_000 does not.
    assert_eq!(a.expect("routes").fee, 70);
    assert_eq!(b.expect("routes").fee, 500);
    assert_eq!(CallCounts::get(&network.calls.probe_next), 10);

    let mut counts = network.seen_probe_counts.lock().unwrap().clone();
    counts.sort_unstable();
    assert_eq!(counts, vec![0, 0, 1, 1, 2, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_every_attempt_carries_request_constraints() {
    let network = Arc::new(network(endless_script(2)));
    let router = network.router(RouterConfig::default());
    let mut request = scenario_request(1_000);
    request.incoming_peer = Some(key(7).to_string());
    request.ignore = vec![
        IgnoreEntry {
            from_public_key: key(1).to_string(),
            to_public_key: None,
        },
        IgnoreEntry {
            from_public_key: key(2).to_string(),
            to_public_key: Some(key(3).to_string()),
        },
    ];

    router.find_routes(&request).await.expect("routes");

    let expected_ignore = vec![
        Ignore {
            from_public_key: key(1),
            to_public_key: None,
        },
        Ignore {
            from_public_key: key(2),
            to_public_key: Some(key(3)),
        },
    ];
    let attempts = network.seen_attempts.lock().unwrap().clone();
    // Two scripted paths, then exhaustion.
    assert_eq!(attempts.len(), 3);
    for (i, attempt) in attempts.iter().enumerate() {
        assert_eq!(attempt.probe_count, i);
        assert_eq!(attempt.destination, destination());
        assert_eq!(attempt.incoming_peer, Some(key(7)));
        assert_eq!(attempt.outgoing_channel, None);
        assert_eq!(attempt.ignore, expected_ignore);
        assert_eq!(attempt.max_tokens, 4_252_017);
    }
}
