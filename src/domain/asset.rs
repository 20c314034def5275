//! Asset and wallet identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Well-known mint addresses.
pub mod mints {
    /// System program id, used by the swap screen to stand for native SOL.
    pub const NATIVE: &str = "11111111111111111111111111111111";
    /// Wrapped SOL mint.
    pub const WSOL: &str = "So11111111111111111111111111111111111111112";
    /// RAY mint, the default quote asset.
    pub const RAY: &str = "4k3Dyjzvzp8eMKahLg5ojXkTQuoXz5z5RUP3gRSRk8Rg";
    /// USDC mint.
    pub const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    /// USDT mint.
    pub const USDT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";
}

/// Length in bytes of a decoded public key.
const PUBKEY_LEN: usize = 32;

fn decode_pubkey(kind: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::Empty { kind });
    }
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|_| DomainError::InvalidBase58 {
            kind,
            value: value.to_string(),
        })?;
    if bytes.len() != PUBKEY_LEN {
        return Err(DomainError::InvalidLength {
            kind,
            value: value.to_string(),
            len: bytes.len(),
        });
    }
    Ok(())
}

/// Asset (mint) identifier - opaque base58 string.
///
/// The inner String is private. Use [`AssetId::parse`] for user input and
/// [`AssetId::new`] for values that are only ever compared, such as ones
/// read back from a cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create an `AssetId` without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse and validate a base58-encoded 32-byte mint address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the input is empty, not base58, or not 32 bytes.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let id = id.trim();
        decode_pubkey("asset id", id)?;
        Ok(Self(id.to_string()))
    }

    /// The native asset.
    #[must_use]
    pub fn native() -> Self {
        Self::new(mints::NATIVE)
    }

    /// The default quote asset.
    #[must_use]
    pub fn default_quote() -> Self {
        Self::new(mints::RAY)
    }

    /// Wrapped SOL.
    #[must_use]
    pub fn wrapped_sol() -> Self {
        Self::new(mints::WSOL)
    }

    /// Get the asset ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Connected wallet address, used only for referral attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and validate a base58-encoded 32-byte wallet address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the input is empty, not base58, or not 32 bytes.
    pub fn parse(address: &str) -> Result<Self, DomainError> {
        let address = address.trim();
        decode_pubkey("wallet address", address)?;
        Ok(Self(address.to_string()))
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
