//! Last-used swap pair cache.
//!
//! Reads and writes never fail from the caller's point of view: storage and
//! parse errors degrade to a cache miss on load and to a log line on save.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{PersistedPair, TokenPair};
use crate::port::KeyValueStore;

/// Default store key for the persisted pair.
pub const DEFAULT_CACHE_KEY: &str = "swap_pair_cache";

/// Outcome of a [`PairCache::save`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The pair was handed to the store.
    Written,
    /// The pair was degenerate and nothing was written.
    SkippedDegenerate,
    /// The store rejected the write.
    Failed,
}

/// Persists the last-used [`TokenPair`] under a single key.
///
/// Callers must not [`save`](Self::save) before [`load`](Self::load) has
/// completed, otherwise a default pair can overwrite the saved one.
#[derive(Clone)]
pub struct PairCache {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PairCache {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Cache using [`DEFAULT_CACHE_KEY`].
    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_CACHE_KEY)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Return the last saved pair, or `None` on first use, storage error or
    /// malformed value.
    #[must_use]
    pub fn load(&self) -> Option<PersistedPair> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No cached swap pair");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read swap pair cache");
                return None;
            }
        };

        match serde_json::from_str::<PersistedPair>(&raw) {
            Ok(pair) if pair.is_empty() => None,
            Ok(pair) => {
                debug!(
                    key = %self.key,
                    input = ?pair.input_mint.as_ref().map(|a| a.as_str()),
                    output = ?pair.output_mint.as_ref().map(|a| a.as_str()),
                    "Loaded cached swap pair"
                );
                Some(pair)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring malformed swap pair cache");
                None
            }
        }
    }

    /// Persist `pair` with its role orientation, skipping degenerate pairs.
    pub fn save(&self, pair: &TokenPair, reversed: bool) -> SaveOutcome {
        if pair.is_degenerate() {
            debug!(asset = %pair.input, "Skipping save of degenerate swap pair");
            return SaveOutcome::SkippedDegenerate;
        }

        let json = match serde_json::to_string(&PersistedPair::new(pair, reversed)) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to encode swap pair");
                return SaveOutcome::Failed;
            }
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => {
                debug!(input = %pair.input, output = %pair.output, reversed, "Saved swap pair");
                SaveOutcome::Written
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to write swap pair cache");
                SaveOutcome::Failed
            }
        }
    }

    /// Forget the saved pair.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            warn!(key = %self.key, error = %e, "Failed to clear swap pair cache");
        }
    }
}
