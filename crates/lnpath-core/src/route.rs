use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, PublicKey};

/// A TLV record attached to the final hop of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// TLV type number.
    #[serde(rename = "type")]
    pub kind: u64,
    /// Hex-encoded record value.
    pub value: String,
}

/// One forwarding step of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteHop {
    /// Channel the payment traverses.
    pub channel: ChannelId,
    /// Capacity of that channel in tokens.
    pub channel_capacity: u64,
    /// Fee charged by this hop, rounded down to tokens.
    pub fee: u64,
    /// Fee charged by this hop in mtokens.
    pub fee_mtokens: u64,
    /// Amount forwarded out of this hop, rounded down to tokens.
    pub forward: u64,
    /// Amount forwarded out of this hop in mtokens.
    pub forward_mtokens: u64,
    /// Node at the far side of the channel, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
    /// Block height at which this hop's HTLC expires.
    pub timeout: u32,
}

/// A complete payment route: the unit the caller executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Hops from the local node toward the destination.
    pub hops: Vec<RouteHop>,
    /// Total fee in tokens.
    pub fee: u64,
    /// Total fee in mtokens.
    pub fee_mtokens: u64,
    /// Amount sent including fees, in mtokens.
    pub mtokens: u64,
    /// Amount sent including fees, in tokens.
    pub tokens: u64,
    /// Expiry height of the first hop.
    pub timeout: u32,
    /// Payment correlation identifier (hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    /// Total amount of the overall payment this route is a part of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_mtokens: Option<u64>,
    /// Records for the destination.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Amount delivered to the destination in mtokens.
    pub fn delivered_mtokens(&self) -> u64 {
        self.hops.last().map(|h| h.forward_mtokens).unwrap_or(0)
    }
}

/// The value returned for a routing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Sum of the fees of all routes, in tokens.
    pub fee: u64,
    /// Routes to execute together.
    pub routes: Vec<Route>,
}

impl RoutingResult {
    /// Build a result, totalling the fees of `routes`.
    pub fn new(routes: Vec<Route>) -> Self {
        let fee = total_fee(&routes);
        Self { fee, routes }
    }
}

/// Sum of route fees, saturating at `u64::MAX`.
pub fn total_fee(routes: &[Route]) -> u64 {
    routes.iter().fold(0u64, |acc, r| acc.saturating_add(r.fee))
}
