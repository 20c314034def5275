//! Key-value store test doubles.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::adapter::outbound::store::MemoryStore;
use crate::error::StoreError;
use crate::port::KeyValueStore;

/// In-memory store that counts writes and can simulate failures.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `value` under `key`. The seed is not counted.
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        let _ = store.inner.set(key, value);
        store
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Raw stored value, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).ok().flatten()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("simulated failure".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.set(key, value)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.check()?;
        self.inner.remove(key)
    }
}
