//! Configuration file handling for `~/.airweather/config.ini`.
//!
//! Settings structs live in [`settings`], constants in [`defaults`], INI
//! parsing in `parser`, and serialization in `writer`.
//!
//! # Example
//!
//! ```
//! use airweather::config::{ConfigFile, DEFAULT_SERVER_PORT};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
//! assert!(config.store.seed_defaults);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, LoaderSettings, LoggingSettings, QuerySettings, ServerSettings, StoreSettings,
};
