//! Application services (use cases).
//!
//! These services drive the domain types through the ports to implement
//! the swap-pair lifecycle: load, resolve, persist and share.

pub mod cache;
pub mod direction;
pub mod referral;
pub mod session;

pub use cache::{PairCache, SaveOutcome, DEFAULT_CACHE_KEY};
pub use direction::{ChartView, DirectionController, DirectionEvent, DirectionState, Phase, Transition};
pub use referral::{featured_asset, ReferralLink, ReferralLinkBuilder};
pub use session::SwapSession;
