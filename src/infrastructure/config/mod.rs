//! Infrastructure configuration modules.

pub mod assets;
pub mod cache;
pub mod logging;
pub mod referral;
pub mod settings;
