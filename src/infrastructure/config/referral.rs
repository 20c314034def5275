//! Referral link configuration.

use serde::Deserialize;

use crate::application::referral::{DEFAULT_BASE_URL, DEFAULT_NATIVE_ALIAS};

/// Swap site and native alias used in referral links.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferralConfig {
    /// Site hosting the `/swap/` page.
    pub base_url: String,
    /// Literal token rendered in place of the native asset id.
    pub native_alias: String,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            native_alias: DEFAULT_NATIVE_ALIAS.to_string(),
        }
    }
}
