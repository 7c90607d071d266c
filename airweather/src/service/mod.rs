//! High-level service facade for airweather operations.
//!
//! [`WeatherService`] wires the airport store, sensor update engine, spatial
//! query engine and frequency tracker together behind the logical operations
//! used by the HTTP layer and the in-process loader.
//!
//! # Example
//!
//! ```
//! use airweather::airport::AirportRecord;
//! use airweather::service::{ServiceConfig, WeatherService};
//!
//! let service = WeatherService::new(ServiceConfig::builder().seed_defaults(false).build());
//! service
//!     .add_or_update_airport(AirportRecord::new("ORD", 41.978603, -87.904842))
//!     .unwrap();
//!
//! assert_eq!(service.list_airport_codes().len(), 1);
//! ```

mod config;
mod facade;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use facade::WeatherService;
