//! lnpath routing: finds a payment route, or a set of concurrent partial
//! routes, toward a destination within a fee budget.
//!
//! This crate provides:
//! - [`RoutingRequest`] and [`RouteQuery`]: the inbound request and its validated form.
//! - Collaborator traits ([`ProbeExecutor`], [`MultiPathProber`], [`ChannelGraph`],
//!   [`RouteSynthesizer`], [`NodeInfo`]) implemented by the node backend.
//! - [`accumulate`]: sequential disjoint probing that estimates destination liquidity.
//! - [`select_routes`]: the final choice between multi-path and single-path routes.
//! - [`Router`]: the facade that runs the whole pipeline for one request.

pub mod accumulator;
pub mod capability;
pub mod error;
pub mod request;
pub mod router;
pub mod selector;
pub mod single_path;
pub mod synthesis;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use accumulator::{accumulate, MultiPathSummary, PathSummary};
pub use capability::check_multipath_support;
pub use error::RoutingError;
pub use request::{HintHop, Ignore, IgnoreEntry, RouteQuery, RoutingRequest};
pub use router::{Collaborators, Router};
pub use selector::select_routes;
pub use single_path::probe_single_path;
pub use synthesis::synthesize_routes;
pub use traits::{
    ChannelGraph, MultiPathProbe, MultiPathProber, NodeInfo, ProbeExecutor, ProbeOutcome,
    RouteSynthesizer, Synthesis,
};
