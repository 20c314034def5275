//! Pair cache configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::infrastructure::paths;
use crate::application::DEFAULT_CACHE_KEY;

/// Environment variable overriding [`CacheConfig::path`].
pub const CACHE_PATH_ENV: &str = "PAIRKEEPER_CACHE_PATH";

/// Where and under which key the last-used pair is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// JSON store document.
    #[serde(default = "paths::default_cache")]
    pub path: PathBuf,
    /// Key of the pair inside the store.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_CACHE_KEY.to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: paths::default_cache(),
            key: default_key(),
        }
    }
}
