use async_trait::async_trait;
use lnpath_core::{Channel, ChannelId, Message, ProbeResult, PublicKey, Route};

use crate::error::RoutingError;
use crate::request::{Ignore, RouteQuery};

/// Finds one working path for the full request.
#[async_trait]
pub trait ProbeExecutor: Send + Sync {
    /// Find a path able to carry `query.tokens` to `query.destination`,
    /// honouring the exclusions, pinning and route hints of the query.
    async fn probe(&self, query: &RouteQuery) -> Result<ProbeResult, RoutingError>;
}

/// Outcome of a single multi-path probe attempt that did not hit a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Another disjoint path was found.
    Found(ProbeResult),
    /// No further disjoint path exists under the current exclusions.
    Exhausted { reason: String },
}

/// Arguments for one multi-path probe attempt.
#[derive(Debug, Clone, Copy)]
pub struct MultiPathProbe<'a> {
    /// Probes accepted so far; their channels must not be reused.
    pub probes: &'a [ProbeResult],
    pub destination: &'a PublicKey,
    pub incoming_peer: Option<&'a PublicKey>,
    pub outgoing_channel: Option<&'a ChannelId>,
    pub ignore: &'a [Ignore],
    /// Largest amount, in tokens, the prober should search for.
    pub max_tokens: u64,
}

/// Discovers one more path, disjoint from those already found.
///
/// A hard error (`Err`) aborts the accumulation; [`ProbeOutcome::Exhausted`]
/// only ends it.
#[async_trait]
pub trait MultiPathProber: Send + Sync {
    /// Search for one more path, avoiding every channel used by
    /// `probe.probes`, with as much capacity as possible up to
    /// `probe.max_tokens`.
    async fn probe_next<'a>(&self, probe: MultiPathProbe<'a>) -> Result<ProbeOutcome, RoutingError>;
}

/// Read access to the channel graph.
#[async_trait]
pub trait ChannelGraph: Send + Sync {
    /// Fetch the current state of channel `id`.
    async fn get_channel(&self, id: &ChannelId) -> Result<Channel, RoutingError>;
}

/// Arguments for turning accumulated probes into routes.
#[derive(Debug, Clone, Copy)]
pub struct Synthesis<'a> {
    pub probes: &'a [ProbeResult],
    /// Current state of every channel referenced by `probes`.
    pub channels: &'a [Channel],
    /// Current block height.
    pub height: u32,
    /// Amount to deliver, in mtokens.
    pub mtokens: u64,
    pub cltv_delta: u32,
    pub payment: Option<&'a str>,
    pub messages: &'a [Message],
}

/// Converts discovered liquidity into disjoint routes covering the amount.
///
/// Returns an empty list when the probes cannot cover the amount.
#[async_trait]
pub trait RouteSynthesizer: Send + Sync {
    /// Split `synthesis.mtokens` across the probed paths.
    async fn synthesize<'a>(&self, synthesis: Synthesis<'a>) -> Result<Vec<Route>, RoutingError>;
}

/// Node-level queries.
#[async_trait]
pub trait NodeInfo: Send + Sync {
    /// Version of the node's wallet service. Only implementations that can
    /// construct multi-path payments answer this successfully.
    async fn wallet_version(&self) -> Result<String, RoutingError>;

    /// Current best block height.
    async fn current_height(&self) -> Result<u32, RoutingError>;
}
