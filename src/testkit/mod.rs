//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for asset ids, wallets and pairs
//! - [`store`] - [`RecordingStore`](store::RecordingStore), a store that
//!   counts writes and can be told to fail
//! - [`config`] - Canonical test configurations
//! - [`clipboard`] - A clipboard that remembers every copy

pub mod clipboard;
pub mod config;
pub mod domain;
pub mod store;
