//! Pairkeeper - swap-pair state controller.
//!
//! Decides, persists and reconciles which of two assets is the base and
//! which the quote of a swap pair, and derives a shareable referral link
//! from that state.
//!
//! # Architecture
//!
//! - **`domain`** - Asset ids, pairs, roles and the priority ranking
//! - **`port`** - Key-value store and clipboard traits
//! - **`application`** - Pair cache, direction state machine, referral links
//!   and the [`SwapSession`](application::SwapSession) facade
//! - **`adapter`** - File/memory stores, clipboards and the CLI
//! - **`infrastructure`** - Configuration, logging and session wiring
//!
//! # Lifecycle
//!
//! A session starts from the default pair, loads the cached pair once,
//! applies the priority ranking once, then persists the raw pair on every
//! settle. Reversal requests take effect on the next settle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pairkeeper::adapter::outbound::store::MemoryStore;
//! use pairkeeper::domain::AssetId;
//! use pairkeeper::infrastructure::bootstrap::build_session_with_store;
//! use pairkeeper::infrastructure::config::settings::Config;
//!
//! let config = Config::default();
//! let mut session = build_session_with_store(&config, Arc::new(MemoryStore::new())).unwrap();
//! session.initialize();
//!
//! let roles = session.roles();
//! assert_eq!(roles.base, AssetId::native());
//! assert!(session.referral_link().is_active());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
