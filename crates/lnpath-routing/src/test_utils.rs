//! Builders shared by the unit tests of this crate.

use lnpath_core::{
    tokens_to_mtokens, Channel, ChannelId, ProbeHop, ProbeResult, PublicKey, Route, RouteHop,
};

use crate::request::{RouteQuery, RoutingRequest};

pub fn key(byte: u8) -> PublicKey {
    PublicKey::from_hex(&format!("02{}", hex::encode([byte; 32]))).unwrap()
}

pub fn channel_id(n: u32) -> ChannelId {
    ChannelId::from_parts(700_000 + n, n, 0)
}

pub fn query(tokens: u64, max_fee: u64) -> RouteQuery {
    RoutingRequest {
        cltv_delta: Some(40),
        destination: Some(key(0xdd).to_string()),
        tokens: Some(tokens),
        max_fee: Some(max_fee),
        ..Default::default()
    }
    .validate()
    .unwrap()
}

/// A probe through the given channels delivering up to `max_tokens`.
pub fn probe(channels: &[u32], max_tokens: u64, latency_ms: u64) -> ProbeResult {
    let hops = channels
        .iter()
        .enumerate()
        .map(|(i, n)| ProbeHop {
            channel: channel_id(*n),
            channel_capacity: max_tokens * 2,
            public_key: key(i as u8 + 1),
            fee_mtokens: 0,
            forward_mtokens: tokens_to_mtokens(max_tokens).unwrap(),
            timeout: 800_040,
        })
        .collect();
    ProbeResult {
        hops,
        max_tokens,
        latency_ms,
    }
}

/// A one-hop probe charging `fee` tokens to deliver `tokens`.
pub fn priced_probe(n: u32, tokens: u64, fee: u64) -> ProbeResult {
    ProbeResult {
        hops: vec![ProbeHop {
            channel: channel_id(n),
            channel_capacity: tokens * 2,
            public_key: key(0xdd),
            fee_mtokens: tokens_to_mtokens(fee).unwrap(),
            forward_mtokens: tokens_to_mtokens(tokens).unwrap(),
            timeout: 800_040,
        }],
        max_tokens: tokens,
        latency_ms: 10,
    }
}

/// A one-hop route charging `fee` tokens.
pub fn route(n: u32, tokens: u64, fee: u64) -> Route {
    Route {
        hops: vec![RouteHop {
            channel: channel_id(n),
            channel_capacity: tokens * 2,
            fee,
            fee_mtokens: fee * 1_000,
            forward: tokens,
            forward_mtokens: tokens * 1_000,
            public_key: Some(key(0xdd)),
            timeout: 800_040,
        }],
        fee,
        fee_mtokens: fee * 1_000,
        mtokens: (tokens + fee) * 1_000,
        tokens: tokens + fee,
        timeout: 800_040,
        payment: None,
        total_mtokens: None,
        messages: Vec::new(),
    }
}

pub fn channel(id: &ChannelId) -> Channel {
    Channel {
        id: id.clone(),
        capacity: 1_000_000,
        policies: Vec::new(),
        updated_at: None,
    }
}
