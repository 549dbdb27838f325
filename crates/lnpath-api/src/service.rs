//! Service entry point: configuration, tracing and the HTTP server wired
//! together around a node backend.

use lnpath_routing::{Collaborators, Router};
use std::path::Path;
use std::sync::Arc;

use crate::api::start_api_server;
use crate::config::ServiceConfig;
use crate::state::ApiState;
use crate::telemetry::init_tracing;

/// Shared handler state for a router built from `config.routing`.
pub fn build_state(config: &ServiceConfig, collaborators: Collaborators) -> Arc<ApiState> {
    let router = Router::new(config.routing.clone(), collaborators);
    Arc::new(ApiState::new(router))
}

/// Run the route finder service until the server stops.
///
/// A subscriber installed by the host takes precedence over `config.logging`.
pub async fn serve(config: &ServiceConfig, collaborators: Collaborators) -> anyhow::Result<()> {
    if let Err(e) = init_tracing(&config.logging) {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }

    let addr = config.api_addr()?;
    let state = build_state(config, collaborators);
    tracing::info!(
        %addr,
        max_paths = config.routing.max_paths,
        search_ceiling = config.routing.search_ceiling(),
        "starting lnpath service"
    );

    start_api_server(addr, state).await
}

/// Load the TOML config at `path` (defaults when missing) and [`serve`] it.
pub async fn serve_from_file(path: &Path, collaborators: Collaborators) -> anyhow::Result<()> {
    let config = ServiceConfig::load(path)?;
    serve(&config, collaborators).await
}
