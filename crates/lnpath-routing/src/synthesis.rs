use std::collections::HashSet;

use futures::future::try_join_all;
use lnpath_core::{ChannelId, ProbeResult, Route};

use crate::accumulator::MultiPathSummary;
use crate::error::RoutingError;
use crate::request::RouteQuery;
use crate::traits::{ChannelGraph, NodeInfo, RouteSynthesizer, Synthesis};

/// Distinct channels referenced by `probes`, in first-seen order.
pub fn unique_channels(probes: &[ProbeResult]) -> Vec<ChannelId> {
    let mut seen = HashSet::new();
    probes
        .iter()
        .flat_map(|p| p.hops.iter().map(|h| &h.channel))
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Turn accumulated probes into concrete multi-path routes.
///
/// Returns no routes when the accumulated liquidity cannot cover the
/// requested amount. Channel lookups run concurrently with each other and
/// with the block-height query.
pub async fn synthesize_routes(
    graph: &dyn ChannelGraph,
    node: &dyn NodeInfo,
    synthesizer: &dyn RouteSynthesizer,
    query: &RouteQuery,
    summary: &MultiPathSummary,
) -> Result<Vec<Route>, RoutingError> {
    if summary.routes_max < query.tokens {
        tracing::debug!(
            routes_max = summary.routes_max,
            tokens = query.tokens,
            "multi-path liquidity below requested amount"
        );
        return Ok(Vec::new());
    }

    let ids = unique_channels(&summary.probes);

    let (channels, height) = tokio::try_join!(
        try_join_all(ids.iter().map(|id| graph.get_channel(id))),
        node.current_height(),
    )?;

    let routes = synthesizer
        .synthesize(Synthesis {
            probes: &summary.probes,
            channels: &channels,
            height,
            mtokens: query.mtokens,
            cltv_delta: query.cltv_delta,
            payment: query.payment.as_deref(),
            messages: &query.messages,
        })
        .await?;

    tracing::debug!(
        routes = routes.len(),
        channels = channels.len(),
        height,
        "multi-path routes synthesized"
    );

    Ok(routes
        .into_iter()
        .map(|route| with_request_metadata(route, query))
        .collect())
}

/// Fill in the payment identifier and messages the synthesizer left unset.
fn with_request_metadata(mut route: Route, query: &RouteQuery) -> Route {
    if route.payment.is_none() {
        route.payment = query.payment.clone();
    }
    if route.messages.is_empty() {
        route.messages = query.messages.clone();
    }
    route
}
