/// Errors raised while parsing or converting core values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("amount overflow: {tokens} tokens cannot be expressed in mtokens")]
    AmountOverflow { tokens: u64 },
}
