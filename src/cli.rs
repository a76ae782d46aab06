use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TomeRater - library catalog with reader and work rankings
#[derive(Parser, Debug)]
#[command(name = "tomerater")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a catalog script and print listings and rankings
    Report {
        /// Catalog script (.toml, .json, .yaml)
        script: PathBuf,

        /// Length of the "n most" rankings
        #[arg(long)]
        top: Option<u32>,

        /// Ask for a new contact when a registration is refused
        #[arg(short, long)]
        interactive: bool,

        /// Config file to use instead of the project and user config
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check whether a contact address would be accepted
    CheckContact {
        /// Contact address to check
        value: String,
    },
}
