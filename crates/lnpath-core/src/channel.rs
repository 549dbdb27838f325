use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, PublicKey};

/// Forwarding policy one side of a channel advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPolicy {
    /// Node that advertises this policy.
    pub public_key: PublicKey,
    pub base_fee_mtokens: u64,
    /// Proportional fee in parts per million.
    pub fee_rate: u64,
    pub cltv_delta: u32,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub min_htlc_mtokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_htlc_mtokens: Option<u64>,
}

/// Current channel-graph view of a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    /// Capacity in tokens.
    pub capacity: u64,
    /// Policies of the two channel peers.
    pub policies: Vec<ChannelPolicy>,
    /// Last gossip update, as reported by the graph source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
