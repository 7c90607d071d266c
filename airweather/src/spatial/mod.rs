//! Great-circle distance and radius-bounded neighbour search.
//!
//! Two distance formulas are available:
//!
//! - [`distance_km`]: the legacy formula. Only the latitude and longitude
//!   deltas are converted to radians; the cosine terms take latitude in
//!   degrees. Query results match what existing clients already see.
//! - [`great_circle_km`]: the textbook haversine with every term in radians.
//!
//! [`DistanceFormula`] picks one for a [`SpatialQueryEngine`]. The default is
//! [`DistanceFormula::Legacy`].

mod distance;
mod query;

pub use distance::{
    distance_km, great_circle_km, DistanceFormula, UnknownFormulaError, EARTH_RADIUS_KM,
};
pub use query::SpatialQueryEngine;
