//! HTTP API server for the route finder.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lnpath_core::RoutingResult;
use lnpath_routing::{RoutingError, RoutingRequest};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Instrument;

use crate::models::{ErrorResponse, StatusResponse, MALFORMED_BODY_REASON};
use crate::state::ApiState;

/// Error half of a handler result, rendered as the failure triple.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn malformed_body(rejection: &JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                code: StatusCode::BAD_REQUEST.as_u16(),
                reason: MALFORMED_BODY_REASON.into(),
                context: Some(json!({ "detail": rejection.body_text() })),
            },
        }
    }
}

impl From<RoutingError> for ApiError {
    fn from(err: RoutingError) -> Self {
        let body = ErrorResponse::from(&err);
        let status =
            StatusCode::from_u16(body.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, body }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// --- Handlers ---

async fn handle_status(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    let config = state.router.config();
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        max_paths: config.max_paths,
        search_ceiling: config.search_ceiling(),
    })
}

async fn handle_find_routes(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RoutingRequest>, JsonRejection>,
) -> Result<Json<RoutingResult>, ApiError> {
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("find_routes", %request_id);

    async move {
        let Json(request) = payload.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "rejected request body");
            ApiError::malformed_body(&rejection)
        })?;
        let result = state.router.find_routes(&request).await?;
        Ok(Json(result))
    }
    .instrument(span)
    .await
}

// --- Server ---

pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/v1/status", get(handle_status))
        .route("/api/v1/routes", post(handle_find_routes))
        .with_state(state)
}

pub async fn start_api_server(listen_addr: SocketAddr, state: Arc<ApiState>) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(%listen_addr, "HTTP API server started");
    axum::serve(listener, app).await?;
    Ok(())
}
