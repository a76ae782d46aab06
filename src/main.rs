//! TomeRater CLI
//!
//! Usage: tomerater <COMMAND>
//!
//! Commands:
//!   report         Apply a catalog script and print listings and rankings
//!   check-contact  Check whether a contact address would be accepted

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            script,
            top,
            interactive,
            config,
        } => commands::report::cmd_report(&script, top, interactive, config.as_deref(), cli.json),
        Commands::CheckContact { value } => commands::check_contact::cmd_check_contact(&value, cli.json),
    }
}

/// RUST_LOG wins over -v; logs go to stderr so stdout stays parseable
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
