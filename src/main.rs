use clap::Parser;
use tracing::debug;

use pairkeeper::adapter::inbound::cli::command::{CheckCommand, Cli, ColorChoice, Commands};
use pairkeeper::adapter::inbound::cli::output::{self, OutputConfig};
use pairkeeper::adapter::inbound::cli::{check, pair};
use pairkeeper::error::Result;
use pairkeeper::infrastructure::config::settings::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

#[allow(clippy::result_large_err)]
fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Show(args) => pair::execute_show(&load_config(cli)?, args),
        Commands::Select(args) => pair::execute_select(&load_config(cli)?, args),
        Commands::Clear => pair::execute_clear(&load_config(cli)?),
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli.config),
    }
}

#[allow(clippy::result_large_err)]
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();
    debug!(config = %cli.config.display(), "pairkeeper starting");
    Ok(config)
}
