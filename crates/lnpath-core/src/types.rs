use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of milli-units (mtokens) in one base unit (token).
pub const MTOKENS_PER_TOKEN: u64 = 1_000;

/// Length of a compressed secp256k1 public key in bytes.
const PUBLIC_KEY_LEN: usize = 33;

/// Convert base units to milli-units, failing instead of wrapping.
pub fn tokens_to_mtokens(tokens: u64) -> Result<u64, CoreError> {
    tokens
        .checked_mul(MTOKENS_PER_TOKEN)
        .ok_or(CoreError::AmountOverflow { tokens })
}

/// Convert milli-units to base units, rounding down.
pub fn mtokens_to_tokens(mtokens: u64) -> u64 {
    mtokens / MTOKENS_PER_TOKEN
}

/// A node identity: a hex-encoded 33-byte compressed public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(String);

impl PublicKey {
    /// Parse a public key from its hex encoding.
    pub fn from_hex(hex_key: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(hex_key)
            .map_err(|e| CoreError::InvalidPublicKey(format!("{}: {}", hex_key, e)))?;
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(CoreError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(CoreError::InvalidPublicKey(format!(
                "expected compressed key prefix 02 or 03, got {:02x}",
                bytes[0]
            )));
        }
        Ok(Self(hex::encode(bytes)))
    }

    /// The lowercase hex encoding.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PublicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short channel id in `BLOCKxTXxOUTPUT` notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// Parse a short channel id.
    pub fn parse(id: &str) -> Result<Self, CoreError> {
        let parts: Vec<&str> = id.split('x').collect();
        if parts.len() != 3 {
            return Err(CoreError::InvalidChannelId(format!(
                "expected BLOCKxTXxOUTPUT, got: {}",
                id
            )));
        }
        let block = parts[0]
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidChannelId(format!("invalid block height in {}", id)))?;
        let tx = parts[1]
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidChannelId(format!("invalid tx index in {}", id)))?;
        let output = parts[2]
            .parse::<u16>()
            .map_err(|_| CoreError::InvalidChannelId(format!("invalid output index in {}", id)))?;
        Ok(Self::from_parts(block, tx, output))
    }

    /// Build a channel id from its components.
    pub fn from_parts(block: u32, tx: u32, output: u16) -> Self {
        Self(format!("{}x{}x{}", block, tx, output))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChannelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChannelId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
