//! Domain validation errors for core domain types.
//!
//! These errors are returned by the `parse` constructors of
//! [`AssetId`](super::AssetId) and [`WalletAddress`](super::WalletAddress).
//!
//! # Examples
//!
//! ```
//! use pairkeeper::domain::error::DomainError;
//! use pairkeeper::domain::AssetId;
//!
//! let result = AssetId::parse("not base58 0OIl");
//! assert!(matches!(result, Err(DomainError::InvalidBase58 { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is empty.
    #[error("{kind} cannot be empty")]
    Empty {
        /// What kind of identifier was being parsed.
        kind: &'static str,
    },

    /// Identifier is not valid base58.
    #[error("{kind} '{value}' is not valid base58")]
    InvalidBase58 {
        /// What kind of identifier was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Identifier decodes to the wrong number of bytes.
    #[error("{kind} '{value}' decodes to {len} bytes, expected 32")]
    InvalidLength {
        /// What kind of identifier was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Decoded length.
        len: usize,
    },
}
