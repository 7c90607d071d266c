//! Airport records and the keyed store that owns them.
//!
//! An [`AirportRecord`] carries an airport's identity, position and optional
//! metadata together with its [`AtmosphericSnapshot`] and a request counter.
//! Records live in an [`AirportStore`], which validates every record before
//! it becomes visible.
//!
//! # Example
//!
//! ```
//! use airweather::airport::{AirportRecord, AirportStore};
//!
//! let store = AirportStore::new();
//! store.upsert(AirportRecord::new("bos", 42.364347, -71.005181)).unwrap();
//!
//! let bos = store.find("BOS").unwrap();
//! assert_eq!(bos.iata, "BOS");
//! assert!(bos.snapshot.is_empty());
//! ```

mod parser;
mod store;
mod validation;

use serde::{Deserialize, Serialize};

use crate::atmosphere::AtmosphericSnapshot;

pub use parser::{AirportCsvParser, ParseError, CSV_COLUMNS};
pub use store::{default_seed, AirportStore, UpsertOutcome};
pub use validation::{validate, AirportField, ValidationError, DST_CODES};

/// An airport with its position, metadata and current weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    /// IATA/FAA code, the store key (e.g. "BOS").
    pub iata: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// ICAO code (e.g. "KBOS").
    #[serde(default)]
    pub icao: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Altitude in feet.
    #[serde(default, rename = "alt", alias = "altitude")]
    pub altitude: Option<f64>,
    /// Hours offset from UTC.
    #[serde(default)]
    pub timezone: Option<f64>,
    /// Daylight saving category, one of [`DST_CODES`].
    #[serde(default)]
    pub dst: Option<String>,
    #[serde(default, rename = "atmosphericInformation")]
    pub snapshot: AtmosphericSnapshot,
    /// Number of proximity queries that used this airport as origin.
    #[serde(default)]
    pub request_count: u64,
}

impl AirportRecord {
    /// Create a record with only the required fields set.
    pub fn new(iata: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            iata: iata.into(),
            lat,
            lon,
            icao: None,
            name: None,
            city: None,
            country: None,
            altitude: None,
            timezone: None,
            dst: None,
            snapshot: AtmosphericSnapshot::new(),
            request_count: 0,
        }
    }

    pub fn with_icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = Some(icao.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_timezone(mut self, timezone: f64) -> Self {
        self.timezone = Some(timezone);
        self
    }

    pub fn with_dst(mut self, dst: impl Into<String>) -> Self {
        self.dst = Some(dst.into());
        self
    }

    /// Copy every metadata field from `other`, keeping this record's
    /// snapshot and request counter.
    pub fn replace_metadata(&mut self, other: AirportRecord) {
        let AirportRecord {
            iata,
            lat,
            lon,
            icao,
            name,
            city,
            country,
            altitude,
            timezone,
            dst,
            snapshot: _,
            request_count: _,
        } = other;
        self.iata = iata;
        self.lat = lat;
        self.lon = lon;
        self.icao = icao;
        self.name = name;
        self.city = city;
        self.country = country;
        self.altitude = altitude;
        self.timezone = timezone;
        self.dst = dst;
    }

    /// Returns true if both records carry the same metadata, ignoring
    /// snapshot and request counter.
    pub fn same_metadata(&self, other: &AirportRecord) -> bool {
        self.iata == other.iata
            && self.lat == other.lat
            && self.lon == other.lon
            && self.icao == other.icao
            && self.name == other.name
            && self.city == other.city
            && self.country == other.country
            && self.altitude == other.altitude
            && self.timezone == other.timezone
            && self.dst == other.dst
    }
}

/// Normalize an airport code for use as a store key.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
