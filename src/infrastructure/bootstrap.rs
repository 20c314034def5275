//! Composition root: builds a [`SwapSession`] from configuration.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::store::FileStore;
use crate::application::{DirectionController, PairCache, ReferralLinkBuilder, SwapSession};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::KeyValueStore;

/// Build an uninitialized session backed by the configured cache file.
///
/// # Errors
///
/// Returns an error if the asset or referral settings are invalid.
#[allow(clippy::result_large_err)]
pub fn build_session(config: &Config) -> Result<SwapSession> {
    debug!(path = %config.cache.path.display(), "Using file store");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.cache.path));
    build_session_with_store(config, store)
}

/// Build an uninitialized session over an arbitrary store.
///
/// # Errors
///
/// Returns an error if the asset or referral settings are invalid.
#[allow(clippy::result_large_err)]
pub fn build_session_with_store(
    config: &Config,
    store: Arc<dyn KeyValueStore>,
) -> Result<SwapSession> {
    let cache = PairCache::new(store, config.cache.key.clone());
    let controller = DirectionController::new(
        cache,
        config.assets.resolver()?,
        config.assets.default_pair()?,
    );
    let builder = ReferralLinkBuilder::new(
        &config.referral.base_url,
        config.assets.native_asset()?,
        config.referral.native_alias.clone(),
    )?;
    Ok(SwapSession::new(controller, builder))
}

/// Build a [`PairCache`] over the configured cache file.
#[must_use]
pub fn pair_cache(config: &Config) -> PairCache {
    PairCache::new(
        Arc::new(FileStore::new(&config.cache.path)),
        config.cache.key.clone(),
    )
}
