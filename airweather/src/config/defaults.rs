//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::spatial::DistanceFormula;

/// Default bind address for the HTTP server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_SERVER_PORT: u16 = 9090;

/// Default maximum query radius: half the Earth's circumference.
pub const DEFAULT_MAX_RADIUS_KM: f64 = 20038.0;

/// Default server URL for the CSV loader.
pub const DEFAULT_LOADER_SERVER_URL: &str = "http://localhost:9090";

/// Default loader request timeout in seconds.
pub const DEFAULT_LOADER_TIMEOUT_SECS: u64 = 30;

/// Default log file name inside the log directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "airweather.log";

/// Default log file path (~/.airweather/logs/airweather.log).
pub fn default_log_file() -> PathBuf {
    super::file::config_directory()
        .join("logs")
        .join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                address: DEFAULT_SERVER_ADDRESS.to_string(),
                port: DEFAULT_SERVER_PORT,
            },
            query: QuerySettings {
                distance_formula: DistanceFormula::default(),
                max_radius_km: DEFAULT_MAX_RADIUS_KM,
            },
            store: StoreSettings {
                seed_defaults: true,
                airports_file: None,
            },
            loader: LoaderSettings {
                server_url: DEFAULT_LOADER_SERVER_URL.to_string(),
                timeout: DEFAULT_LOADER_TIMEOUT_SECS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
