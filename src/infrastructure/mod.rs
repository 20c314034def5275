//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for session wiring
//! - [`config`] - Configuration loading and validation
//! - [`paths`] - Locations under `~/.pairkeeper/`

pub mod bootstrap;
pub mod config;
pub mod paths;
