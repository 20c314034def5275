//! Builders for domain primitives used across tests.

use crate::domain::{mints, AssetId, TokenPair, WalletAddress};

/// A wallet address that passes validation.
pub const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

pub fn native() -> AssetId {
    AssetId::native()
}

pub fn ray() -> AssetId {
    AssetId::new(mints::RAY)
}

pub fn usdc() -> AssetId {
    AssetId::new(mints::USDC)
}

pub fn usdt() -> AssetId {
    AssetId::new(mints::USDT)
}

pub fn wsol() -> AssetId {
    AssetId::new(mints::WSOL)
}

/// An asset absent from every priority table.
pub fn unlisted() -> AssetId {
    AssetId::new("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263")
}

pub fn wallet() -> WalletAddress {
    WalletAddress::parse(WALLET).unwrap_or_else(|e| panic!("test wallet is valid: {e}"))
}

pub fn pair(input: AssetId, output: AssetId) -> TokenPair {
    TokenPair::new(input, output)
}
