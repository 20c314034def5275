//! Canonical test configurations.

use std::path::Path;

use crate::infrastructure::config::settings::Config;

/// Default configuration with the cache file placed at `cache_path`.
pub fn with_cache(cache_path: &Path) -> Config {
    let mut config = Config::default();
    config.cache.path = cache_path.to_path_buf();
    config
}

/// A complete TOML document pointing the cache at `cache_path`.
pub fn toml_with_cache(cache_path: &Path) -> String {
    format!(
        r#"[logging]
level = "warn"
format = "pretty"

[cache]
path = "{}"
key = "swap_pair_cache"

[referral]
base_url = "https://raydium.io"
native_alias = "sol"
"#,
        cache_path.display().to_string().replace('\\', "\\\\")
    )
}
