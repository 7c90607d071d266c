//! CLI runner for common setup and operations.
//!
//! Loads the configuration file and initializes logging so that command
//! handlers start from the same state.

use tracing::info;

use airweather::config::ConfigFile;
use airweather::logging::{init_logging, LoggingGuard, LoggingOptions};
use airweather::service::ServiceConfig;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Create a runner with optional debug logging.
    ///
    /// `debug_mode` enables debug-level logging regardless of `RUST_LOG`.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let options = LoggingOptions {
            file: config.logging.file.clone(),
            stdout: true,
            debug: debug_mode,
        };
        let logging_guard =
            init_logging(&options).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("airweather v{}", airweather::VERSION);
        info!("airweather CLI: {} command", command);
    }

    /// Service configuration from the config file, optionally without seed airports.
    pub fn service_config(&self, no_seed: bool) -> ServiceConfig {
        service_config(&self.config, no_seed)
    }
}

fn service_config(config: &ConfigFile, no_seed: bool) -> ServiceConfig {
    ServiceConfig::builder()
        .distance_formula(config.query.distance_formula)
        .max_radius_km(config.query.max_radius_km)
        .seed_defaults(config.store.seed_defaults && !no_seed)
        .build()
}
