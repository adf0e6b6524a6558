//! CLI module for catalogd
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP API
//! - init: Create an empty data file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
