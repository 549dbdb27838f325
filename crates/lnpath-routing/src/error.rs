use serde_json::{json, Value};

/// Failure class for requests that are malformed.
pub const CLASS_BAD_REQUEST: u16 = 400;

/// Failure class for requests that could not be routed or executed.
pub const CLASS_UNAVAILABLE: u16 = 503;

/// Errors that can occur while finding routes.
///
/// Every variant maps onto a `(code, reason, context)` triple, see
/// [`RoutingError::code`], [`RoutingError::reason`] and [`RoutingError::context`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    #[error("expected a positive cltv delta")]
    ExpectedCltvDelta,

    #[error("expected a destination public key: {detail}")]
    ExpectedDestination { detail: String },

    #[error("expected a positive amount of tokens")]
    ExpectedTokens,

    #[error("expected a maximum fee")]
    ExpectedMaxFee,

    #[error("expected a positive maximum path count")]
    ExpectedPositiveMaxPaths,

    #[error("invalid ignore entry at index {index}: {detail}")]
    InvalidIgnoreEntry { index: usize, detail: String },

    #[error("invalid incoming peer: {detail}")]
    InvalidIncomingPeer { detail: String },

    #[error("invalid outgoing channel: {detail}")]
    InvalidOutgoingChannel { detail: String },

    #[error("invalid payment identifier: expected 32 hex-encoded bytes")]
    InvalidPaymentIdentifier,

    #[error("{tokens} tokens cannot be expressed in mtokens")]
    AmountOverflow { tokens: u64 },

    #[error("{operation} failed: {detail}")]
    Collaborator {
        operation: &'static str,
        detail: String,
    },

    #[error("no multi-path probe succeeded: {reason}")]
    NoProbeSucceeded { reason: String },

    #[error("no affordable path found within max fee {max_fee}")]
    NoAffordablePathFound { fee: Option<u64>, max_fee: u64 },
}

impl RoutingError {
    /// A hard failure reported by a network-facing collaborator.
    pub fn collaborator(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Collaborator {
            operation,
            detail: detail.into(),
        }
    }

    /// Numeric failure class: 400 for malformed requests, 503 otherwise.
    pub fn code(&self) -> u16 {
        match self {
            Self::ExpectedCltvDelta
            | Self::ExpectedDestination { .. }
            | Self::ExpectedTokens
            | Self::ExpectedMaxFee
            | Self::ExpectedPositiveMaxPaths
            | Self::InvalidIgnoreEntry { .. }
            | Self::InvalidIncomingPeer { .. }
            | Self::InvalidOutgoingChannel { .. }
            | Self::InvalidPaymentIdentifier
            | Self::AmountOverflow { .. } => CLASS_BAD_REQUEST,
            Self::Collaborator { .. }
            | Self::NoProbeSucceeded { .. }
            | Self::NoAffordablePathFound { .. } => CLASS_UNAVAILABLE,
        }
    }

    /// Symbolic failure reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ExpectedCltvDelta => "ExpectedCltvDeltaToFindRoutes",
            Self::ExpectedDestination { .. } => "ExpectedDestinationToFindRoutes",
            Self::ExpectedTokens => "ExpectedTokensToFindRoutes",
            Self::ExpectedMaxFee => "ExpectedMaxFeeToFindRoutes",
            Self::ExpectedPositiveMaxPaths => "ExpectedPositiveMaxPathsToFindRoutes",
            Self::InvalidIgnoreEntry { .. } => "ExpectedValidIgnoreEntriesToFindRoutes",
            Self::InvalidIncomingPeer { .. } => "ExpectedValidIncomingPeerToFindRoutes",
            Self::InvalidOutgoingChannel { .. } => "ExpectedValidOutgoingChannelToFindRoutes",
            Self::InvalidPaymentIdentifier => "ExpectedValidPaymentIdentifierToFindRoutes",
            Self::AmountOverflow { .. } => "ExpectedTokensWithinRepresentableRange",
            Self::Collaborator { .. } => "UnexpectedErrorFromCollaborator",
            Self::NoProbeSucceeded { .. } => "FailedToFindMultiPathProbes",
            Self::NoAffordablePathFound { .. } => "NoAffordablePathFound",
        }
    }

    /// Optional structured context for the failure.
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::ExpectedDestination { detail }
            | Self::InvalidIncomingPeer { detail }
            | Self::InvalidOutgoingChannel { detail } => Some(json!({ "detail": detail })),
            Self::InvalidIgnoreEntry { index, detail } => {
                Some(json!({ "index": index, "detail": detail }))
            }
            Self::AmountOverflow { tokens } => Some(json!({ "tokens": tokens })),
            Self::Collaborator { operation, detail } => {
                Some(json!({ "operation": operation, "detail": detail }))
            }
            Self::NoProbeSucceeded { reason } => Some(json!({ "reason": reason })),
            Self::NoAffordablePathFound { fee, max_fee } => {
                Some(json!({ "fee": fee, "max_fee": max_fee }))
            }
            _ => None,
        }
    }
}
