//! Asset defaults and priority ranking configuration.

use serde::Deserialize;

use crate::domain::{mints, AssetId, PriorityResolver, TokenPair};
use crate::error::{ConfigError, Result};

/// Default pair and priority table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Native asset, rendered by its alias in referral links.
    pub native: String,
    /// Output asset of the default pair.
    pub default_quote: String,
    /// Assets ordered most-preferred-as-base first. Unlisted assets rank last.
    pub priority: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            native: mints::NATIVE.to_string(),
            default_quote: mints::RAY.to_string(),
            priority: [mints::NATIVE, mints::WSOL, mints::RAY, mints::USDC, mints::USDT]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn parse_asset(field: &'static str, value: &str) -> Result<AssetId> {
    AssetId::parse(value).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

impl AssetsConfig {
    #[allow(clippy::result_large_err)]
    pub fn native_asset(&self) -> Result<AssetId> {
        parse_asset("native", &self.native)
    }

    /// `(native, default_quote)`.
    #[allow(clippy::result_large_err)]
    pub fn default_pair(&self) -> Result<TokenPair> {
        Ok(TokenPair::new(
            self.native_asset()?,
            parse_asset("default_quote", &self.default_quote)?,
        ))
    }

    #[allow(clippy::result_large_err)]
    pub fn resolver(&self) -> Result<PriorityResolver> {
        let ranked = self
            .priority
            .iter()
            .map(|id| parse_asset("priority", id))
            .collect::<Result<Vec<_>>>()?;
        Ok(PriorityResolver::new(ranked))
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        let pair = self.default_pair()?;
        if pair.is_degenerate() {
            return Err(ConfigError::InvalidValue {
                field: "default_quote",
                reason: "must differ from native".to_string(),
            }
            .into());
        }

        let resolver = self.resolver()?;
        if resolver.len() != self.priority.len() {
            return Err(ConfigError::InvalidValue {
                field: "priority",
                reason: "contains duplicate assets".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
