//! Handler for `pairkeeper check config`.

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration and print the effective settings.
#[allow(clippy::result_large_err)]
pub fn execute_config(path: &Path) -> Result<()> {
    let config = if path.exists() {
        Config::load(path)?
    } else {
        output::warning("Configuration file not found, checking defaults");
        Config::load_or_default(path)?
    };

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Cache", config.cache.path.display());
    output::field("Cache key", &config.cache.key);
    output::field("Native", &config.assets.native);
    output::field("Quote", &config.assets.default_quote);
    output::field("Ranked", config.assets.priority.len());
    output::field("Swap site", &config.referral.base_url);

    Ok(())
}
