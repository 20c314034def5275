//! Swap-pair domain types. Pure, no I/O.

mod asset;
mod pair;
mod priority;

pub mod error;

pub use asset::{mints, AssetId, WalletAddress};
pub use pair::{PersistedPair, Roles, TokenPair};
pub use priority::PriorityResolver;
