//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::spatial::DistanceFormula;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Proximity query settings
    pub query: QuerySettings,
    /// Airport store settings
    pub store: StoreSettings,
    /// CSV loader settings
    pub loader: LoaderSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Interface address to bind
    pub address: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerSettings {
    /// `address:port`, ready to be parsed as a socket address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Proximity query configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    /// Distance formula used by `nearby`
    pub distance_formula: DistanceFormula,
    /// Largest accepted query radius in kilometres
    pub max_radius_km: f64,
}

/// Airport store configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Load the built-in seed airports at startup
    pub seed_defaults: bool,
    /// Optional airports.dat file loaded by `serve` at startup
    pub airports_file: Option<PathBuf>,
}

/// CSV loader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderSettings {
    /// Base URL of the server receiving airports
    pub server_url: String,
    /// Timeout in seconds for each upload request
    pub timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
