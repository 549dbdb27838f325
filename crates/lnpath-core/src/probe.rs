use serde::{Deserialize, Serialize};

use crate::route::{Message, Route, RouteHop};
use crate::types::{mtokens_to_tokens, ChannelId, PublicKey};

/// One hop of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeHop {
    pub channel: ChannelId,
    pub channel_capacity: u64,
    /// Node the hop forwards to.
    pub public_key: PublicKey,
    pub fee_mtokens: u64,
    pub forward_mtokens: u64,
    /// Cumulative expiry height at this hop.
    pub timeout: u32,
}

/// Evidence that a path toward the destination exists and can carry
/// up to `max_tokens`.
///
/// Probe results are produced by a prober and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Hops from the local node toward the destination.
    pub hops: Vec<ProbeHop>,
    /// Largest amount, in tokens, the path was observed to deliver.
    pub max_tokens: u64,
    /// Time the probe took, in milliseconds.
    pub latency_ms: u64,
}

impl ProbeResult {
    /// Sum of the hop fees in mtokens.
    pub fn fee_mtokens(&self) -> u64 {
        self.hops
            .iter()
            .fold(0u64, |acc, h| acc.saturating_add(h.fee_mtokens))
    }

    /// Expiry height of the first hop, i.e. the whole path's timeout.
    pub fn timeout(&self) -> u32 {
        self.hops.first().map(|h| h.timeout).unwrap_or(0)
    }

    /// Channels traversed, in order.
    pub fn channels(&self) -> Vec<ChannelId> {
        self.hops.iter().map(|h| h.channel.clone()).collect()
    }

    /// Nodes traversed, in order.
    pub fn public_keys(&self) -> Vec<PublicKey> {
        self.hops.iter().map(|h| h.public_key.clone()).collect()
    }

    /// Shape this probe into an executable route.
    pub fn to_route(&self, payment: Option<String>, messages: Vec<Message>) -> Route {
        let hops: Vec<RouteHop> = self
            .hops
            .iter()
            .map(|h| RouteHop {
                channel: h.channel.clone(),
                channel_capacity: h.channel_capacity,
                fee: mtokens_to_tokens(h.fee_mtokens),
                fee_mtokens: h.fee_mtokens,
                forward: mtokens_to_tokens(h.forward_mtokens),
                forward_mtokens: h.forward_mtokens,
                public_key: Some(h.public_key.clone()),
                timeout: h.timeout,
            })
            .collect();

        let fee_mtokens = self.fee_mtokens();
        let delivered = hops.last().map(|h| h.forward_mtokens).unwrap_or(0);
        let mtokens = delivered.saturating_add(fee_mtokens);

        Route {
            hops,
            fee: mtokens_to_tokens(fee_mtokens),
            fee_mtokens,
            mtokens,
            tokens: mtokens_to_tokens(mtokens),
            timeout: self.timeout(),
            total_mtokens: payment.as_ref().map(|_| delivered),
            payment,
            messages,
        }
    }
}
