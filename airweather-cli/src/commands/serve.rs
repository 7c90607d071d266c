//! Serve command - run the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use airweather::config::ConfigFile;
use airweather::http::serve;
use airweather::loader::AirportLoader;
use airweather::service::WeatherService;

use crate::error::CliError;
use crate::runner::CliRunner;

/// How to stop a running server.
const STOP_HINT: &str = "Press Ctrl+C or GET /collect/exit to stop...";

/// Arguments for the serve command.
pub struct ServeArgs {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub airports: Option<PathBuf>,
    pub no_seed: bool,
    pub debug: bool,
}

/// Run the serve command.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("serve");
    let config = runner.config();

    let addr = resolve_bind_address(config, args.address.as_deref(), args.port)?;
    let service = Arc::new(WeatherService::new(runner.service_config(args.no_seed)));

    let airports_file = args.airports.or_else(|| config.store.airports_file.clone());
    if let Some(path) = airports_file {
        let report = AirportLoader::new(Arc::clone(&service)).load_file(&path)?;
        println!(
            "Loaded {} airport(s) from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );
    }

    println!("airweather v{}", airweather::VERSION);
    println!();
    println!("Listening:   http://{}", addr);
    println!("Airports:    {}", service.store().len());
    println!("Formula:     {}", service.config().distance_formula());
    println!();
    println!("{}", STOP_HINT);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(async move {
        let shutdown = CancellationToken::new();

        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl+C received, shutting down");
                    signal_token.cancel();
                }
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
            }
        });

        serve(addr, service, shutdown).await
    })?;

    println!("Server stopped");
    Ok(())
}

/// Combine the configured bind address with command-line overrides.
fn resolve_bind_address(
    config: &ConfigFile,
    address: Option<&str>,
    port: Option<u16>,
) -> Result<SocketAddr, CliError> {
    let host = address.unwrap_or(&config.server.address);
    let port = port.unwrap_or(config.server.port);

    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| CliError::Config(format!("invalid bind address '{}:{}': {}", host, port, e)))
}
