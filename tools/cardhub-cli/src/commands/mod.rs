//! CLI command implementations.

pub mod ads;
pub mod config;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the ads command.
#[derive(Args)]
pub struct AdsArgs {
    #[command(subcommand)]
    pub command: AdsCommand,
}

#[derive(Subcommand)]
pub enum AdsCommand {
    /// Run the weighted rotation and print the picks.
    Rotate {
        /// Ads payload (JSON array from the ads service).
        #[arg(long)]
        ads: String,

        /// Store weight table (JSON array). Overrides the config file.
        #[arg(short, long)]
        weights: Option<String>,

        /// Number of picks.
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Fixed shuffle seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,

        /// Only rotate ads booked for this slot (e.g. top-banner).
        #[arg(short, long)]
        position: Option<String>,
    },
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// Drive a search session through a script of actions.
    Run {
        /// JSON array of search actions.
        #[arg(short, long)]
        script: String,

        /// Search backend response to apply after the script.
        #[arg(short, long)]
        results: Option<String>,

        /// Category to open the session on. Overrides the config file.
        #[arg(long)]
        category: Option<String>,

        /// Start from a saved session snapshot.
        #[arg(long)]
        restore: Option<String>,

        /// Write the final session snapshot to this file.
        #[arg(long)]
        save: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
