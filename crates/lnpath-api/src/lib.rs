//! lnpath API: serves the route finder over HTTP.
//!
//! Endpoints:
//! - `POST /api/v1/routes`: find routes for a routing request.
//! - `GET /api/v1/status`: service version and routing defaults.

pub mod api;
pub mod config;
pub mod models;
pub mod service;
pub mod state;
pub mod telemetry;


pub use api::{build_router, start_api_server};
pub use config::{ApiConfig, LogFormat, LoggingConfig, ServiceConfig};
pub use models::{ErrorResponse, StatusResponse};
pub use service::{build_state, serve, serve_from_file};
pub use state::ApiState;
pub use telemetry::init_tracing;
