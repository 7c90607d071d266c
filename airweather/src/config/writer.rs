//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let seed_defaults = if config.store.seed_defaults {
        "true"
    } else {
        "false"
    };
    let airports_file = config
        .store
        .airports_file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[server]
; Interface address the HTTP server binds to (default: 127.0.0.1)
address = {}
; TCP port (default: 9090)
port = {}

[query]
; Distance formula for proximity queries:
;   legacy    - formula used by existing clients (default)
;   haversine - textbook great-circle distance
distance_formula = {}
; Largest accepted query radius in km (default: 20038)
max_radius_km = {}

[store]
; Load the built-in BOS, EWR, JFK, LGA and MMU airports at startup
seed_defaults = {}
; Optional airports.dat file loaded when the server starts
; Example: airports_file = ~/data/airports.dat
airports_file = {}

[loader]
; Server receiving airports from `airweather load`
server_url = {}
; Timeout in seconds for each upload (default: 30)
timeout = {}

[logging]
; Log file, truncated at the start of each session
file = {}
"#,
        config.server.address,
        config.server.port,
        config.query.distance_formula,
        config.query.max_radius_km,
        seed_defaults,
        airports_file,
        config.loader.server_url,
        config.loader.timeout,
        path_to_string(&config.logging.file),
    )
}

/// Render a path with the home directory collapsed to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
