//! Swap screen session.
//!
//! Wires the selector, connection and chart contracts to the direction
//! controller. The referral link is never stored: it is derived from the
//! controller's current roles and the connected wallet whenever asked for,
//! and stays inactive until the pair has settled.

use super::direction::{ChartView, DirectionController, DirectionState, Phase};
use super::referral::{featured_asset, ReferralLink, ReferralLinkBuilder};
use crate::domain::{AssetId, Roles, WalletAddress};
use crate::error::Result;
use crate::port::Clipboard;

/// One swap screen's worth of pair state.
pub struct SwapSession {
    controller: DirectionController,
    builder: ReferralLinkBuilder,
    wallet: Option<WalletAddress>,
}

impl SwapSession {
    /// Create a session. Call [`initialize`](Self::initialize) before use.
    pub fn new(controller: DirectionController, builder: ReferralLinkBuilder) -> Self {
        Self {
            controller,
            builder,
            wallet: None,
        }
    }

    /// Load the cached pair and settle.
    pub fn initialize(&mut self) {
        self.controller.initialize();
    }

    /// Input selector change.
    pub fn on_input_asset_change(&mut self, asset: AssetId) {
        self.controller.on_input_asset_change(asset);
    }

    /// Output selector change.
    pub fn on_output_asset_change(&mut self, asset: AssetId) {
        self.controller.on_output_asset_change(asset);
    }

    /// Ask for the roles to swap at the next settle.
    pub fn on_reverse_requested(&mut self) {
        self.controller.on_reverse_requested();
    }

    /// Commit pending changes, including a requested reversal.
    pub fn settle(&mut self) {
        self.controller.settle();
    }

    /// Chart-only role toggle.
    pub fn on_view_toggle(&mut self) {
        self.controller.toggle_view();
    }

    /// Connection provider update.
    pub fn on_wallet_change(&mut self, wallet: Option<WalletAddress>) {
        self.wallet = wallet;
    }

    /// Current direction state.
    #[must_use]
    pub fn state(&self) -> &DirectionState {
        self.controller.state()
    }

    /// Settled base and quote, as used by the referral link.
    #[must_use]
    pub fn roles(&self) -> Roles {
        self.controller.roles()
    }

    /// Chart roles, which may be toggled away from [`roles`](Self::roles).
    #[must_use]
    pub fn chart_view(&self) -> ChartView {
        self.controller.chart_view()
    }

    /// Connected wallet, if any.
    #[must_use]
    pub fn wallet(&self) -> Option<&WalletAddress> {
        self.wallet.as_ref()
    }

    /// Referral link for the current roles and wallet.
    #[must_use]
    pub fn referral_link(&self) -> ReferralLink {
        if self.controller.phase() != Phase::Settled {
            return ReferralLink::inactive();
        }
        ReferralLink::derive(&self.builder, &self.controller.roles(), self.wallet.as_ref())
    }

    /// Asset to advertise alongside the referral link.
    #[must_use]
    pub fn featured_asset(&self) -> &AssetId {
        featured_asset(&self.controller.state().pair)
    }

    /// Copy the referral link. Returns false while the link is inactive.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error if the copy fails.
    pub fn copy_referral_link(&self, clipboard: &dyn Clipboard) -> Result<bool> {
        self.referral_link().copy_to(clipboard)
    }
}
