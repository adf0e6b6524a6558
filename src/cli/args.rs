//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve [--config <path>] [--port <port>] [--data <path>]
//! - catalogd init [--config <path>] [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - Item catalog backend over a single JSON file
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the catalog HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides the configuration file)
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Data file holding the item collection (overrides the configuration file)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Create an empty data file
    Init {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data file to create (overrides the configuration file)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
