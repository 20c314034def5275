//! Command-line interface definitions.
//!
//! Every command that touches the pair runs one full session: build,
//! load the cache, apply the requested events, settle and report.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::paths;

/// Persisted swap-pair selection and referral links
#[derive(Parser, Debug)]
#[command(name = "pairkeeper")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the pairkeeper CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the saved pair, its roles and the referral link
    Show(ShowArgs),

    /// Change the pair and save it
    Select(SelectArgs),

    /// Forget the saved pair
    Clear,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `pairkeeper check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file.
    Config,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug, Default)]
pub struct ShowArgs {
    /// Connected wallet address, added to the link as referrer
    #[arg(long)]
    pub wallet: Option<String>,
}

/// Arguments for the `select` subcommand.
#[derive(Parser, Debug, Default)]
pub struct SelectArgs {
    /// New input asset (mint address)
    #[arg(long)]
    pub input: Option<String>,

    /// New output asset (mint address)
    #[arg(long)]
    pub output: Option<String>,

    /// Swap base and quote roles
    #[arg(long)]
    pub reverse: bool,

    /// Connected wallet address, added to the link as referrer
    #[arg(long)]
    pub wallet: Option<String>,

    /// Copy the referral link (prints the bare link to stdout)
    #[arg(long)]
    pub copy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_command() {
        let cli = Cli::try_parse_from(["pairkeeper", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(ShowArgs { wallet: None })));
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.config, paths::default_config());
    }

    #[test]
    fn parse_select_command() {
        let cli = Cli::try_parse_from([
            "pairkeeper",
            "select",
            "--input",
            "in",
            "--output",
            "out",
            "--reverse",
            "--copy",
        ])
        .unwrap();
        let Commands::Select(args) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(args.input.as_deref(), Some("in"));
        assert_eq!(args.output.as_deref(), Some("out"));
        assert!(args.reverse);
        assert!(args.copy);
        assert!(args.wallet.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pairkeeper", "show", "--json", "--config", "/tmp/x.toml"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn parse_check_config() {
        let cli = Cli::try_parse_from(["pairkeeper", "check", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Config)));
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["pairkeeper", "-vv", "clear"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
