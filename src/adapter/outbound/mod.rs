//! Outbound adapters (driven side).

pub mod clipboard;
pub mod store;
