//! Path utilities for pairkeeper.
//!
//! All data lives under `~/.pairkeeper/`:
//! - `~/.pairkeeper/config.toml` - configuration
//! - `~/.pairkeeper/cache.json` - persisted swap pair

use std::path::PathBuf;

/// Returns the pairkeeper home directory (`~/.pairkeeper/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pairkeeper")
}

/// Returns the default config file path (`~/.pairkeeper/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default pair cache path (`~/.pairkeeper/cache.json`).
pub fn default_cache() -> PathBuf {
    home_dir().join("cache.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_pairkeeper_home() {
        let home = home_dir();
        assert!(home.to_string_lossy().contains(".pairkeeper"));
        assert!(default_config().starts_with(&home));
        assert!(default_cache().starts_with(&home));
    }
}
