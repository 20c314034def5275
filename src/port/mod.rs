//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`KeyValueStore`] - Persistence for the last-used swap pair
//! - [`Clipboard`] - Copy target for the referral link

mod clipboard;
mod store;

pub use clipboard::Clipboard;
pub use store::KeyValueStore;
