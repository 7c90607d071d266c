//! Bulk loading of `airports.dat` files.
//!
//! The [`AirportLoader`] parses a CSV file with
//! [`AirportCsvParser`](crate::airport::AirportCsvParser) and hands each
//! airport to an [`AirportSink`]: either a remote server
//! ([`HttpAirportSink`]) or an in-process [`WeatherService`].
//!
//! Bad rows and rejected airports are logged and counted; the load keeps
//! going.
//!
//! # Example
//!
//! ```
//! use airweather::loader::AirportLoader;
//! use airweather::service::{ServiceConfig, WeatherService};
//!
//! let service = WeatherService::new(ServiceConfig::builder().seed_defaults(false).build());
//! let data = "1,\"Logan\",\"Boston\",\"United States\",\"BOS\",\"KBOS\",42.364347,-71.005181,19,-5,\"A\"\n";
//!
//! let report = AirportLoader::new(&service).load(data.as_bytes());
//! assert_eq!(report.loaded, 1);
//! assert!(service.get_airport("BOS").is_ok());
//! ```

mod http;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::airport::{AirportCsvParser, AirportRecord, ParseError};
use crate::service::WeatherService;

pub use http::{HttpAirportSink, HttpClient, ReqwestClient};

/// Loader errors.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input file is missing or empty.
    #[error("{0} is not a valid input")]
    InvalidInput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP request could not be made.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The receiver refused the airport.
    #[error("Airport upload failed: {0}")]
    Rejected(String),
}

/// Destination for parsed airports.
pub trait AirportSink {
    fn submit(&self, record: AirportRecord) -> Result<(), LoaderError>;
}

impl AirportSink for WeatherService {
    fn submit(&self, record: AirportRecord) -> Result<(), LoaderError> {
        self.add_or_update_airport(record)
            .map(|_| ())
            .map_err(|e| LoaderError::Rejected(e.to_string()))
    }
}

impl<T: AirportSink + ?Sized> AirportSink for &T {
    fn submit(&self, record: AirportRecord) -> Result<(), LoaderError> {
        (**self).submit(record)
    }
}

impl<T: AirportSink + ?Sized> AirportSink for Arc<T> {
    fn submit(&self, record: AirportRecord) -> Result<(), LoaderError> {
        (**self).submit(record)
    }
}

/// Outcome of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Airports accepted by the sink.
    pub loaded: usize,
    /// Rows that failed to parse or were refused.
    pub skipped: usize,
}

/// Feeds CSV airports into a sink.
pub struct AirportLoader<S> {
    sink: S,
}

impl<S: AirportSink> AirportLoader<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Load a file from disk.
    ///
    /// Missing and empty files are rejected before anything is sent.
    pub fn load_file(&self, path: &Path) -> Result<LoadReport, LoaderError> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| LoaderError::InvalidInput(path.to_path_buf()))?;
        if !metadata.is_file() || metadata.len() == 0 {
            return Err(LoaderError::InvalidInput(path.to_path_buf()));
        }

        let file = File::open(path)?;
        info!(path = %path.display(), "Loading airports");
        Ok(self.load(BufReader::new(file)))
    }

    /// Load airports from any reader.
    pub fn load<R: Read>(&self, reader: R) -> LoadReport {
        let mut report = LoadReport::default();

        for result in AirportCsvParser::parse(reader) {
            match result {
                Ok(record) => {
                    let iata = record.iata.clone();
                    match self.sink.submit(record) {
                        Ok(()) => {
                            report.loaded += 1;
                            info!("Airport {} loaded", iata);
                        }
                        Err(e) => {
                            report.skipped += 1;
                            warn!(iata = %iata, error = %e, "Airport not loaded");
                        }
                    }
                }
                Err(ParseError::Csv(e)) if e.is_io_error() => {
                    warn!(error = %e, "Stopping load on read error");
                    break;
                }
                Err(e) => {
                    report.skipped += 1;
                    warn!("Skipping airport row: {}", e);
                }
            }
        }

        info!(loaded = report.loaded, skipped = report.skipped, "Airport load finished");
        report
    }
}
