//! JSON bodies that are specific to the HTTP surface.
//!
//! Routing requests and results are served in their library form.

use lnpath_routing::RoutingError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reason reported when the request body is not a routing request.
pub const MALFORMED_BODY_REASON: &str = "ExpectedJsonRoutingRequest";

/// Failure triple rendered for every unsuccessful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl From<&RoutingError> for ErrorResponse {
    fn from(err: &RoutingError) -> Self {
        Self {
            code: err.code(),
            reason: err.reason().to_string(),
            context: err.context(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: String,
    pub uptime_secs: u64,
    pub max_paths: usize,
    /// Tokens the multi-path prober searches up to.
    pub search_ceiling: u64,
}
