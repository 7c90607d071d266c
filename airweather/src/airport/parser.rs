//! Parser for `airports.dat` CSV files.
//!
//! Each row has exactly [`CSV_COLUMNS`] comma-separated fields, no header:
//!
//! ```text
//! id, name, city, country, iata, icao, lat, lon, altitude, timezone, dst
//! 1,"General Edward Lawrence Logan Intl","Boston","United States","BOS","KBOS",42.364347,-71.005181,19,-5,"A"
//! ```
//!
//! Fields may be quoted with `"`; surrounding spaces are trimmed and empty
//! lines are ignored. The leading `id` column is not used.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::AirportRecord;

/// Number of fields in an airport row.
pub const CSV_COLUMNS: usize = 11;

/// Error type for airport CSV parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid number of fields on row {row}: expected {expected}, found {found}")]
    FieldCount {
        row: u64,
        expected: usize,
        found: usize,
    },
    #[error("Invalid {field} on row {row}: '{value}'")]
    InvalidNumber {
        row: u64,
        field: &'static str,
        value: String,
    },
}

/// Parser for the `airports.dat` format.
pub struct AirportCsvParser;

impl AirportCsvParser {
    /// Parse airports from a CSV reader.
    ///
    /// Yields one result per non-empty row, so callers can skip bad rows and
    /// keep going.
    pub fn parse<R: Read>(reader: R) -> impl Iterator<Item = Result<AirportRecord, ParseError>> {
        let csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .quote(b'"')
            .from_reader(reader);

        csv_reader
            .into_records()
            .enumerate()
            .map(|(index, result)| {
                let record = result?;
                let row = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(index as u64 + 1);
                Self::parse_record(&record, row)
            })
    }

    /// Parse all airports into a vector.
    ///
    /// Skips rows that fail to parse and logs warnings.
    pub fn parse_all<R: Read>(reader: R) -> Vec<AirportRecord> {
        let mut airports = Vec::new();
        for result in Self::parse(reader) {
            match result {
                Ok(airport) => airports.push(airport),
                Err(e) => {
                    tracing::warn!("Skipping airport row: {}", e);
                }
            }
        }
        airports
    }

    /// Parse a single CSV row.
    ///
    /// `row` is the 1-based line number used in error messages.
    pub fn parse_record(record: &StringRecord, row: u64) -> Result<AirportRecord, ParseError> {
        if record.len() != CSV_COLUMNS {
            return Err(ParseError::FieldCount {
                row,
                expected: CSV_COLUMNS,
                found: record.len(),
            });
        }

        let field = |i: usize| record.get(i).unwrap_or_default();

        let lat = parse_number(row, "latitude", field(6))?;
        let lon = parse_number(row, "longitude", field(7))?;
        let altitude = parse_optional_number(row, "altitude", field(8))?;
        let timezone = parse_optional_number(row, "timezone", field(9))?;

        let mut airport = AirportRecord::new(field(4), lat, lon);
        airport.name = optional_text(field(1));
        airport.city = optional_text(field(2));
        airport.country = optional_text(field(3));
        airport.icao = optional_text(field(5));
        airport.altitude = altitude;
        airport.timezone = timezone;
        airport.dst = optional_text(field(10));
        Ok(airport)
    }
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number(row: u64, field: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        row,
        field,
        value: value.to_string(),
    })
}

fn parse_optional_number(
    row: u64,
    field: &'static str,
    value: &str,
) -> Result<Option<f64>, ParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_number(row, field, value).map(Some)
}
