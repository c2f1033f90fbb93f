//! CLI argument definitions using clap
//!
//! Commands:
//! - `helpdeskd serve [--config <path>] [--data <path>]`
//! - `helpdeskd check [--data <path>]`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// helpdeskd - help ticket service over an in-memory store
#[derive(Parser, Debug)]
#[command(name = "helpdeskd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the ticket document and serve the HTTP API
    Serve {
        /// Path to a configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed document path, overriding the configured one
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Validate a ticket document and print its collection counts
    Check {
        /// Seed document path
        #[arg(long, default_value = "data.jsonld")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
