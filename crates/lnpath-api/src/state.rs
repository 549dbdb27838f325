//! Shared state for HTTP handlers.

use lnpath_routing::Router;
use std::time::Instant;

pub struct ApiState {
    /// Route finder serving every request.
    pub router: Router,
    /// When the service started.
    pub start_time: Instant,
}

impl ApiState {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            start_time: Instant::now(),
        }
    }
}
