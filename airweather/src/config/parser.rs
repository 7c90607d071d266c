//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module is the single place where INI key names are mapped to struct
//! fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("address") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("server", "address", v, "must not be empty"));
            }
            config.server.address = v.to_string();
        }
        if let Some(v) = section.get("port") {
            config.server.port = v
                .trim()
                .parse()
                .map_err(|_| invalid("server", "port", v, "must be a port number (0-65535)"))?;
        }
    }

    // [query] section
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("distance_formula") {
            config.query.distance_formula = v
                .parse()
                .map_err(|_| invalid("query", "distance_formula", v, "must be 'legacy' or 'haversine'"))?;
        }
        if let Some(v) = section.get("max_radius_km") {
            let parsed: f64 = v.trim().parse().map_err(|_| {
                invalid("query", "max_radius_km", v, "must be a positive number (km)")
            })?;
            if !parsed.is_finite() || parsed <= 0.0 {
                return Err(invalid(
                    "query",
                    "max_radius_km",
                    v,
                    "must be a positive number (km)",
                ));
            }
            config.query.max_radius_km = parsed;
        }
    }

    // [store] section
    if let Some(section) = ini.section(Some("store")) {
        if let Some(v) = section.get("seed_defaults") {
            config.store.seed_defaults = parse_bool(v);
        }
        if let Some(v) = section.get("airports_file") {
            let v = v.trim();
            if !v.is_empty() {
                config.store.airports_file = Some(expand_tilde(v));
            }
        }
    }

    // [loader] section
    if let Some(section) = ini.section(Some("loader")) {
        if let Some(v) = section.get("server_url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid(
                    "loader",
                    "server_url",
                    v,
                    "must start with http:// or https://",
                ));
            }
            config.loader.server_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.loader.timeout = v.trim().parse().map_err(|_| {
                invalid("loader", "timeout", v, "must be a positive integer (seconds)")
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
