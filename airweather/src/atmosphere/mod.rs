//! Atmospheric sensor data for a single airport.
//!
//! - [`DataPoint`] - one summarized sensor measurement
//! - [`SensorKind`] - the fixed set of supported sensors
//! - [`AtmosphericSnapshot`] - the latest reading per sensor kind
//! - [`SensorUpdateEngine`] - range-gated writes of new readings into the store
//!
//! # Accepted ranges
//!
//! | Sensor        | Accepted mean         |
//! |---------------|-----------------------|
//! | wind          | `>= 0`                |
//! | temperature   | `[-50, 100)`          |
//! | humidity      | `[0, 100)`            |
//! | pressure      | `[650, 800)`          |
//! | cloudcover    | `[0, 100)`            |
//! | precipitation | `[0, 100)`            |
//!
//! Readings outside their range are ignored and reported as
//! [`UpdateOutcome::Rejected`], never as an error.

mod data_point;
mod sensor;
mod snapshot;
mod update;

pub use data_point::{DataPoint, DataPointBuilder};
pub use sensor::SensorKind;
pub use snapshot::{AtmosphericSnapshot, RECENT_WINDOW_HOURS};
pub use update::{accepted_range, AcceptedRange, RejectReason, SensorUpdateEngine, UpdateOutcome};
