//! Shareable swap referral links.
//!
//! A link is derived from `(base, quote, connected wallet)` on demand and
//! never stored.

use tracing::{debug, info};
use url::Url;

use crate::domain::{AssetId, Roles, TokenPair, WalletAddress};
use crate::error::Result;
use crate::port::Clipboard;

/// Default site hosting the swap page.
pub const DEFAULT_BASE_URL: &str = "https://raydium.io";

/// Default symbolic alias for the native asset in links.
pub const DEFAULT_NATIVE_ALIAS: &str = "sol";

/// Builds canonical swap URLs.
#[derive(Debug, Clone)]
pub struct ReferralLinkBuilder {
    swap_url: Url,
    native: AssetId,
    native_alias: String,
}

impl ReferralLinkBuilder {
    /// Create a builder for `<base_url>/swap/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, native: AssetId, native_alias: impl Into<String>) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let swap_url = base.join("swap/")?;
        Ok(Self {
            swap_url,
            native,
            native_alias: native_alias.into(),
        })
    }

    /// Render an asset for a query parameter.
    fn render<'a>(&'a self, asset: &'a AssetId) -> &'a str {
        if *asset == self.native {
            &self.native_alias
        } else {
            asset.as_str()
        }
    }

    /// Build the link; `referrer` is present only when a wallet is connected.
    #[must_use]
    pub fn build(&self, base: &AssetId, quote: &AssetId, wallet: Option<&WalletAddress>) -> String {
        let mut url = self.swap_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("inputMint", self.render(base));
            query.append_pair("outputMint", self.render(quote));
            if let Some(wallet) = wallet {
                query.append_pair("referrer", wallet.as_str());
            }
        }
        url.into()
    }
}

/// A derived referral link.
///
/// Inactive until the pair has settled, so nothing can be copied before then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralLink {
    href: Option<String>,
}

impl ReferralLink {
    /// Link with no derivation yet.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Derive the link for the given roles and connected wallet.
    #[must_use]
    pub fn derive(
        builder: &ReferralLinkBuilder,
        roles: &Roles,
        wallet: Option<&WalletAddress>,
    ) -> Self {
        Self {
            href: Some(builder.build(&roles.base, &roles.quote, wallet)),
        }
    }

    /// True once a link has been computed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.href.is_some()
    }

    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Copy the link to `clipboard` if active. Returns whether a copy happened.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error if the copy fails.
    pub fn copy_to(&self, clipboard: &dyn Clipboard) -> Result<bool> {
        let Some(href) = self.href.as_deref() else {
            debug!("Referral link not active yet, nothing copied");
            return Ok(false);
        };
        clipboard.set_text(href)?;
        info!(%href, "Referral link copied");
        Ok(true)
    }
}

/// The asset advertised next to the referral link.
///
/// When the output side is wrapped SOL the input asset is the interesting
/// one; otherwise the output asset is.
#[must_use]
pub fn featured_asset(pair: &TokenPair) -> &AssetId {
    if pair.output == AssetId::wrapped_sol() {
        &pair.input
    } else {
        &pair.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mints;
    use crate::testkit::clipboard::RecordingClipboard;

    const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

    fn builder() -> ReferralLinkBuilder {
        ReferralLinkBuilder::new(DEFAULT_BASE_URL, AssetId::native(), DEFAULT_NATIVE_ALIAS).unwrap()
    }

    fn wallet() -> WalletAddress {
        WalletAddress::parse(WALLET).unwrap()
    }

    fn roles(base: &str, quote: &str) -> Roles {
        Roles {
            base: AssetId::new(base),
            quote: AssetId::new(quote),
        }
    }

    #[test]
    fn native_asset_uses_alias() {
        let builder = builder();
        let link = builder.build(&AssetId::native(), &AssetId::default_quote(), None);
        assert_eq!(
            link,
            format!("https://raydium.io/swap/?inputMint=sol&outputMint={}", mints::RAY)
        );
    }

    #[test]
    fn referrer_is_appended_when_connected() {
        let builder = builder();
        let link = builder.build(&AssetId::new(mints::USDC), &AssetId::native(), Some(&wallet()));
        assert_eq!(
            link,
            format!(
                "https://raydium.io/swap/?inputMint={}&outputMint=sol&referrer={WALLET}",
                mints::USDC
            )
        );
    }

    #[test]
    fn referrer_is_omitted_when_disconnected() {
        let builder = builder();
        let link = builder.build(&AssetId::new(mints::USDC), &AssetId::native(), None);
        assert!(!link.contains("referrer"));
    }

    #[test]
    fn base_url_with_path_keeps_path() {
        let builder =
            ReferralLinkBuilder::new("https://example.com/app", AssetId::native(), "SOL").unwrap();
        let link = builder.build(&AssetId::native(), &AssetId::new(mints::USDC), None);
        assert!(link.starts_with("https://example.com/app/swap/?inputMint=SOL&"));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(ReferralLinkBuilder::new("raydium.io", AssetId::native(), "sol").is_err());
    }

    #[test]
    fn inactive_link_copies_nothing() {
        let clipboard = RecordingClipboard::new();
        let link = ReferralLink::inactive();
        assert!(!link.is_active());
        assert!(!link.copy_to(&clipboard).unwrap());
        assert!(clipboard.copies().is_empty());
    }

    #[test]
    fn derived_link_is_active_and_copyable() {
        let clipboard = RecordingClipboard::new();
        let link = ReferralLink::derive(&builder(), &roles(mints::NATIVE, mints::USDC), None);
        assert!(link.is_active());
        assert!(link.copy_to(&clipboard).unwrap());
        assert_eq!(clipboard.text().as_deref(), link.href());
    }

    #[test]
    fn derivation_depends_only_on_inputs() {
        let builder = builder();
        let roles = roles(mints::NATIVE, mints::USDC);
        assert_eq!(
            ReferralLink::derive(&builder, &roles, None),
            ReferralLink::derive(&builder, &roles, None)
        );
        assert_ne!(
            ReferralLink::derive(&builder, &roles, None),
            ReferralLink::derive(&builder, &roles, Some(&wallet()))
        );
    }

    #[test]
    fn featured_asset_skips_wrapped_sol() {
        let usdc = AssetId::new(mints::USDC);
        let pair = TokenPair::new(usdc.clone(), AssetId::wrapped_sol());
        assert_eq!(featured_asset(&pair), &usdc);

        let pair = TokenPair::new(AssetId::wrapped_sol(), usdc.clone());
        assert_eq!(featured_asset(&pair), &usdc);
    }
}
