//! airweather - Airport weather collection and proximity queries
//!
//! This library holds airport records and their latest atmospheric sensor
//! readings in memory, and answers "what is the weather near airport X
//! within radius R" queries.
//!
//! # High-Level API
//!
//! The [`service`] module provides the facade used by the HTTP layer and
//! the bulk loader:
//!
//! ```
//! use airweather::atmosphere::{DataPoint, SensorKind};
//! use airweather::service::{ServiceConfig, WeatherService};
//!
//! let service = WeatherService::new(ServiceConfig::default());
//!
//! let wind = DataPoint::new(10, 20, 30, 22.0, 10);
//! service.post_reading("BOS", SensorKind::Wind, wind).unwrap();
//!
//! let snapshots = service.query_weather("BOS", 0.0).unwrap();
//! assert_eq!(snapshots[0].wind(), Some(&wind));
//! ```

pub mod airport;
pub mod atmosphere;
pub mod config;
pub mod error;
pub mod frequency;
pub mod http;
pub mod loader;
pub mod logging;
pub mod service;
pub mod spatial;

pub use error::WeatherError;

/// Version of the airweather library and CLI.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
