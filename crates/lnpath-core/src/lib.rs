//! lnpath core: data model shared by the routing engine and its surfaces.
//!
//! This crate provides:
//! - [`PublicKey`] and [`ChannelId`]: validated node and channel identities.
//! - [`ProbeResult`]: the liquidity evidence a prober returns for one path.
//! - [`Route`] and [`RoutingResult`]: the forwarding instructions handed back to callers.
//! - [`Channel`]: a channel-graph descriptor consumed by route synthesis.
//! - [`RouterConfig`]: path budget and search ceiling defaults.

pub mod channel;
pub mod config;
pub mod error;
pub mod probe;
pub mod route;
pub mod types;

pub use channel::{Channel, ChannelPolicy};
pub use config::RouterConfig;
pub use error::CoreError;
pub use probe::{ProbeHop, ProbeResult};
pub use route::{total_fee, Message, Route, RouteHop, RoutingResult};
pub use types::{mtokens_to_tokens, tokens_to_mtokens, ChannelId, PublicKey, MTOKENS_PER_TOKEN};
