use lnpath_core::Route;

use crate::request::RouteQuery;
use crate::traits::ProbeExecutor;

/// Probe for one working path and shape it into a route.
///
/// A failed or empty probe yields `None`; the caller decides whether that
/// is fatal once the multi-path branch has reported.
pub async fn probe_single_path(executor: &dyn ProbeExecutor, query: &RouteQuery) -> Option<Route> {
    let probe = match executor.probe(query).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(
                destination = %query.destination,
                tokens = query.tokens,
                error = %e,
                "single-path probe failed"
            );
            return None;
        }
    };

    if probe.hops.is_empty() {
        tracing::debug!(destination = %query.destination, "single-path probe returned no hops");
        return None;
    }

    let route = probe.to_route(query.payment.clone(), query.messages.clone());
    tracing::debug!(
        hops = route.hop_count(),
        fee = route.fee,
        latency_ms = probe.latency_ms,
        "single-path probe succeeded"
    );
    Some(route)
}
