use lnpath_core::{tokens_to_mtokens, ChannelId, Message, PublicKey};
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Length of a payment correlation identifier in bytes.
const PAYMENT_ID_LEN: usize = 32;

/// A hop or node pair to avoid, as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreEntry {
    pub from_public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_public_key: Option<String>,
}

/// A validated exclusion: the node `from`, or only the hop `from` → `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ignore {
    pub from_public_key: PublicKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_public_key: Option<PublicKey>,
}

/// One hop of an externally supplied candidate route hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintHop {
    pub public_key: PublicKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_mtokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cltv_delta: Option<u32>,
}

/// A routing request as received from a caller.
///
/// The required fields are optional here so that their absence is reported
/// as a validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRequest {
    /// Final hop timeout margin, in blocks.
    pub cltv_delta: Option<u32>,
    /// Hex-encoded destination public key.
    pub destination: Option<String>,
    /// Amount to deliver, in tokens.
    pub tokens: Option<u64>,
    /// Largest total fee the caller accepts, in tokens.
    pub max_fee: Option<u64>,
    /// Budget of disjoint paths for the multi-path search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
    /// Pin the last hop into the destination through this peer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_peer: Option<String>,
    /// Pin the first hop out of the local node to this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<IgnoreEntry>,
    /// Candidate route hints, e.g. from an invoice.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Vec<HintHop>>,
    /// Hex-encoded payment correlation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

/// A routing request with every required field present and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub cltv_delta: u32,
    pub destination: PublicKey,
    pub tokens: u64,
    /// `tokens` in mtokens; always representable.
    pub mtokens: u64,
    pub max_fee: u64,
    pub max_paths: Option<usize>,
    pub incoming_peer: Option<PublicKey>,
    pub outgoing_channel: Option<ChannelId>,
    pub ignore: Vec<Ignore>,
    pub routes: Vec<Vec<HintHop>>,
    pub payment: Option<String>,
    pub messages: Vec<Message>,
}

impl RoutingRequest {
    /// Check the request and convert it into a [`RouteQuery`].
    ///
    /// Performs no I/O.
    pub fn validate(&self) -> Result<RouteQuery, RoutingError> {
        let cltv_delta = self
            .cltv_delta
            .filter(|delta| *delta > 0)
            .ok_or(RoutingError::ExpectedCltvDelta)?;

        let destination = self
            .destination
            .as_deref()
            .ok_or_else(|| RoutingError::ExpectedDestination {
                detail: "missing".into(),
            })
            .and_then(|hex_key| {
                PublicKey::from_hex(hex_key).map_err(|e| RoutingError::ExpectedDestination {
                    detail: e.to_string(),
                })
            })?;

        let tokens = self
            .tokens
            .filter(|tokens| *tokens > 0)
            .ok_or(RoutingError::ExpectedTokens)?;
        let mtokens = tokens_to_mtokens(tokens)
            .map_err(|_| RoutingError::AmountOverflow { tokens })?;

        let max_fee = self.max_fee.ok_or(RoutingError::ExpectedMaxFee)?;

        if self.max_paths == Some(0) {
            return Err(RoutingError::ExpectedPositiveMaxPaths);
        }

        let ignore = self
            .ignore
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_ignore(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let incoming_peer = self
            .incoming_peer
            .as_deref()
            .map(PublicKey::from_hex)
            .transpose()
            .map_err(|e| RoutingError::InvalidIncomingPeer {
                detail: e.to_string(),
            })?;

        let outgoing_channel = self
            .outgoing_channel
            .as_deref()
            .map(ChannelId::parse)
            .transpose()
            .map_err(|e| RoutingError::InvalidOutgoingChannel {
                detail: e.to_string(),
            })?;

        let payment = self
            .payment
            .as_deref()
            .map(normalize_payment_id)
            .transpose()?;

        Ok(RouteQuery {
            cltv_delta,
            destination,
            tokens,
            mtokens,
            max_fee,
            max_paths: self.max_paths,
            incoming_peer,
            outgoing_channel,
            ignore,
            routes: self.routes.clone(),
            payment,
            messages: self.messages.clone(),
        })
    }
}

fn parse_ignore(index: usize, entry: &IgnoreEntry) -> Result<Ignore, RoutingError> {
    let invalid = |detail: String| RoutingError::InvalidIgnoreEntry { index, detail };

    let from_public_key =
        PublicKey::from_hex(&entry.from_public_key).map_err(|e| invalid(e.to_string()))?;
    let to_public_key = entry
        .to_public_key
        .as_deref()
        .map(PublicKey::from_hex)
        .transpose()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(Ignore {
        from_public_key,
        to_public_key,
    })
}

fn normalize_payment_id(payment: &str) -> Result<String, RoutingError> {
    match hex::decode(payment) {
        Ok(bytes) if bytes.len() == PAYMENT_ID_LEN => Ok(hex::encode(bytes)),
        _ => Err(RoutingError::InvalidPaymentIdentifier),
    }
}
