//! Mint priority ranking used to choose a default base/quote ordering.
//!
//! Lower rank means more preferred as base. Assets missing from the table
//! rank after every listed asset, so resolution never blocks on them.

use std::collections::HashMap;

use super::asset::{mints, AssetId};

/// Ranks assets by their position in an ordered preference list.
#[derive(Debug, Clone)]
pub struct PriorityResolver {
    ranks: HashMap<AssetId, u32>,
    unknown: u32,
}

impl PriorityResolver {
    /// Build a resolver from assets ordered most-preferred-as-base first.
    ///
    /// If an asset appears more than once, its first position wins.
    #[must_use]
    pub fn new(ordered: impl IntoIterator<Item = AssetId>) -> Self {
        let mut ranks = HashMap::new();
        let mut next = 0u32;
        for asset in ordered {
            ranks.entry(asset).or_insert_with(|| {
                let rank = next;
                next += 1;
                rank
            });
        }
        Self {
            ranks,
            unknown: next,
        }
    }

    /// Rank of `asset`; unknown assets receive the lowest priority.
    #[must_use]
    pub fn priority_of(&self, asset: &AssetId) -> u32 {
        self.ranks.get(asset).copied().unwrap_or(self.unknown)
    }

    /// True when the candidate base ranks below the candidate quote and the
    /// roles should swap.
    #[must_use]
    pub fn should_reverse(&self, candidate_base: &AssetId, candidate_quote: &AssetId) -> bool {
        self.priority_of(candidate_base) > self.priority_of(candidate_quote)
    }

    /// Number of ranked assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns true if no asset is ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Default for PriorityResolver {
    fn default() -> Self {
        Self::new(
            [mints::NATIVE, mints::WSOL, mints::RAY, mints::USDC, mints::USDT]
                .into_iter()
                .map(AssetId::new),
        )
    }
}
