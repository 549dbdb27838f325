use std::sync::Arc;

use lnpath_core::{Route, RouterConfig, RoutingResult};

use crate::accumulator::accumulate;
use crate::capability::check_multipath_support;
use crate::error::RoutingError;
use crate::request::{RouteQuery, RoutingRequest};
use crate::selector::select_routes;
use crate::single_path::probe_single_path;
use crate::synthesis::synthesize_routes;
use crate::traits::{ChannelGraph, MultiPathProber, NodeInfo, ProbeExecutor, RouteSynthesizer};

/// The node-facing services the router depends on.
#[derive(Clone)]
pub struct Collaborators {
    pub probe_executor: Arc<dyn ProbeExecutor>,
    pub multi_path_prober: Arc<dyn MultiPathProber>,
    pub channel_graph: Arc<dyn ChannelGraph>,
    pub route_synthesizer: Arc<dyn RouteSynthesizer>,
    pub node_info: Arc<dyn NodeInfo>,
}

/// Finds single or multi-path routes for routing requests.
///
/// Holds no per-request state; one router can serve concurrent requests.
#[derive(Clone)]
pub struct Router {
    config: RouterConfig,
    collaborators: Collaborators,
}

impl Router {
    /// Create a new router with the given config and collaborators.
    pub fn new(config: RouterConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Find routes for `request`.
    ///
    /// The request is validated before any collaborator is called. The
    /// single-path branch and the multi-path pipeline then run concurrently,
    /// and the selector decides once both have finished.
    pub async fn find_routes(&self, request: &RoutingRequest) -> Result<RoutingResult, RoutingError> {
        let query = request.validate()?;

        let (single_path, multi_path) = tokio::join!(
            probe_single_path(self.collaborators.probe_executor.as_ref(), &query),
            self.multi_path_routes(&query),
        );

        let multi_path_count = multi_path.len();
        let has_single_path = single_path.is_some();
        let result = select_routes(multi_path, single_path, query.max_fee);

        match &result {
            Ok(found) => tracing::info!(
                destination = %query.destination,
                tokens = query.tokens,
                fee = found.fee,
                routes = found.routes.len(),
                "routes found"
            ),
            Err(e) => tracing::info!(
                destination = %query.destination,
                tokens = query.tokens,
                max_fee = query.max_fee,
                multi_path_routes = multi_path_count,
                single_path = has_single_path,
                error = %e,
                "no routes selected"
            ),
        }

        result
    }

    /// Run the multi-path pipeline, folding any failure into "no routes".
    async fn multi_path_routes(&self, query: &RouteQuery) -> Vec<Route> {
        let supported = check_multipath_support(self.collaborators.node_info.as_ref()).await;
        if !supported {
            return Vec::new();
        }
        if let Some(channel) = &query.outgoing_channel {
            tracing::debug!(%channel, "outgoing channel pinned, skipping multi-path");
            return Vec::new();
        }

        let summary = match accumulate(
            self.collaborators.multi_path_prober.as_ref(),
            query,
            &self.config,
        )
        .await
        {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "multi-path accumulation failed");
                return Vec::new();
            }
        };

        match synthesize_routes(
            self.collaborators.channel_graph.as_ref(),
            self.collaborators.node_info.as_ref(),
            self.collaborators.route_synthesizer.as_ref(),
            query,
            &summary,
        )
        .await
        {
            Ok(routes) => routes,
            Err(e) => {
                tracing::warn!(error = %e, "multi-path route synthesis failed");
                Vec::new()
            }
        }
    }
}
