//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::ItemStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Load configuration from an optional JSON file; defaults when absent.
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let Some(path) = path else {
        return Ok(HttpServerConfig::default());
    };

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Entry point: parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, data } => {
            let mut config = load_config(config.as_deref())?;
            apply_overrides(&mut config, port, data);
            serve(config)
        }
        Command::Init { config, data } => {
            let mut config = load_config(config.as_deref())?;
            apply_overrides(&mut config, None, data);
            init(&config)
        }
    }
}

fn apply_overrides(config: &mut HttpServerConfig, port: Option<u16>, data: Option<PathBuf>) {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_path = data;
    }
}

/// Create the data file holding an empty collection.
///
/// Fails if the file already exists.
pub fn init(config: &HttpServerConfig) -> CliResult<()> {
    let store = ItemStore::new(&config.data_path);
    if !store.init()? {
        return Err(CliError::already_initialized(store.path()));
    }
    println!("Initialized empty catalog at {}", store.path().display());
    Ok(())
}

/// Ensure the data file exists, then serve HTTP until ctrl-c.
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_tracing();

    ItemStore::new(&config.data_path).init()?;
    let server = HttpServer::with_config(config);
    info!(addr = %server.socket_addr(), "starting catalog backend");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
