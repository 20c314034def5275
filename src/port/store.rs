//! Store port for the persisted swap pair.
//!
//! This module defines the key-value trait the pair cache writes through.
//! Values are opaque strings; the cache owns their encoding.

use crate::error::StoreError;

/// Persistent string key-value storage.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Calls are synchronous and local; they must not perform network I/O
/// - A missing key is `Ok(None)`, not an error
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Returns true if a value existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
