//! Request-frequency bookkeeping for the status report.
//!
//! Counters here never affect query results. Each proximity query bumps the
//! origin airport's request counter (held on the record in the
//! [`AirportStore`](crate::airport::AirportStore)) and the radius histogram
//! held by the [`FrequencyTracker`].

mod summary;
mod tracker;

pub use summary::{radius_histogram, StatusSummary, DEFAULT_HISTOGRAM_UPPER_BOUND, MAX_HISTOGRAM_LEN};
pub use tracker::{FrequencyTracker, RadiusKey};
