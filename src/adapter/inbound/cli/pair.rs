//! Handlers for the pair commands: `show`, `select` and `clear`.

use serde_json::json;

use super::command::{SelectArgs, ShowArgs};
use super::output;
use crate::adapter::outbound::clipboard::{MemoryClipboard, StdoutClipboard};
use crate::application::SwapSession;
use crate::domain::{AssetId, WalletAddress};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[allow(clippy::result_large_err)]
fn parse_wallet(wallet: Option<&str>) -> Result<Option<WalletAddress>> {
    Ok(wallet.map(WalletAddress::parse).transpose()?)
}

#[allow(clippy::result_large_err)]
fn open_session(config: &Config, wallet: Option<&str>) -> Result<SwapSession> {
    let wallet = parse_wallet(wallet)?;
    let mut session = bootstrap::build_session(config)?;
    session.initialize();
    session.on_wallet_change(wallet);
    Ok(session)
}

/// Show the saved pair as it resolves on load.
#[allow(clippy::result_large_err)]
pub fn execute_show(config: &Config, args: &ShowArgs) -> Result<()> {
    let session = open_session(config, args.wallet.as_deref())?;
    report(&session);
    Ok(())
}

/// Apply a selection, settle it and report the result.
#[allow(clippy::result_large_err)]
pub fn execute_select(config: &Config, args: &SelectArgs) -> Result<()> {
    // Validate everything before the session touches the cache.
    let input = args.input.as_deref().map(AssetId::parse).transpose()?;
    let output_asset = args.output.as_deref().map(AssetId::parse).transpose()?;

    let mut session = open_session(config, args.wallet.as_deref())?;
    if let Some(asset) = input {
        session.on_input_asset_change(asset);
    }
    if let Some(asset) = output_asset {
        session.on_output_asset_change(asset);
    }
    if args.reverse {
        session.on_reverse_requested();
    }
    session.settle();

    if session.state().pair.is_degenerate() {
        output::warning("Input and output are the same asset; the saved pair was not changed");
    }

    report(&session);

    if args.copy {
        copy_link(&session)?;
    }
    Ok(())
}

/// Forget the saved pair.
#[allow(clippy::result_large_err)]
pub fn execute_clear(config: &Config) -> Result<()> {
    bootstrap::pair_cache(config).clear();
    output::success("Saved pair cleared");
    Ok(())
}

#[allow(clippy::result_large_err)]
fn copy_link(session: &SwapSession) -> Result<()> {
    let copied = if output::is_json() {
        let clipboard = MemoryClipboard::new();
        let copied = session.copy_referral_link(&clipboard)?;
        if let Some(link) = clipboard.text() {
            output::record("copied", json!({ "link": link }));
        }
        copied
    } else {
        session.copy_referral_link(&StdoutClipboard)?
    };

    if copied {
        output::success("Referral link copied");
    } else {
        output::warning("Referral link is not ready yet");
    }
    Ok(())
}

fn report(session: &SwapSession) {
    let state = session.state();
    let roles = session.roles();
    let chart = session.chart_view();
    let link = session.referral_link();

    output::record(
        "pair",
        json!({
            "phase": state.phase,
            "input": state.pair.input,
            "output": state.pair.output,
            "base": roles.base,
            "quote": roles.quote,
            "reversed": state.reversed,
            "featured": session.featured_asset(),
            "chartUntil": chart.until_unix(),
            "referralLink": link.href(),
        }),
    );
    if output::is_json() {
        return;
    }

    output::section("Swap Pair");
    output::field("Input", &state.pair.input);
    output::field("Output", &state.pair.output);
    output::field("Base", &roles.base);
    output::field("Quote", &roles.quote);
    output::field("Reversed", state.reversed);
    if output::verbosity() > 0 {
        output::field("Featured", session.featured_asset());
        output::field("Chart until", chart.until.to_rfc3339());
    }

    output::section("Referral");
    match link.href() {
        Some(href) => output::field("Link", href),
        None => output::field("Link", "inactive"),
    }
    if let Some(wallet) = session.wallet() {
        output::field("Referrer", wallet);
    }
}
