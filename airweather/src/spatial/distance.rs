//! Haversine distance on a sphere of radius [`EARTH_RADIUS_KM`].

use std::fmt;
use std::str::FromStr;

use crate::airport::AirportRecord;

/// Earth radius used by both formulas, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Legacy haversine distance between two airports, in kilometres.
///
/// The cosine terms use latitude in degrees, so results differ from a true
/// great-circle distance (JFK to BOS comes out near 203 km instead of about
/// 300 km).
///
/// When the product of the two latitude cosines is negative the haversine
/// term can drop below zero and the result is NaN, for example between
/// (0, 0) and (3, 90). A NaN distance compares false against every radius, so
/// such a pair never appears in the other's neighbourhood. The result is
/// symmetric in the sense that `distance_km(b, a)` is NaN exactly when
/// `distance_km(a, b)` is.
pub fn distance_km(a: &AirportRecord, b: &AirportRecord) -> f64 {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();
    let h = (delta_lat / 2.0).sin().powi(2)
        + (delta_lon / 2.0).sin().powi(2) * (a.lat.cos() * b.lat.cos());
    EARTH_RADIUS_KM * 2.0 * h.sqrt().asin()
}

/// Textbook haversine distance between two airports, in kilometres.
pub fn great_circle_km(a: &AirportRecord, b: &AirportRecord) -> f64 {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();
    let h = (delta_lat / 2.0).sin().powi(2)
        + (delta_lon / 2.0).sin().powi(2) * (a.lat.to_radians().cos() * b.lat.to_radians().cos());
    EARTH_RADIUS_KM * 2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Which distance formula a query uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceFormula {
    /// [`distance_km`]
    #[default]
    Legacy,
    /// [`great_circle_km`]
    Haversine,
}

impl DistanceFormula {
    /// Distance between two airports with this formula.
    pub fn distance(&self, a: &AirportRecord, b: &AirportRecord) -> f64 {
        match self {
            DistanceFormula::Legacy => distance_km(a, b),
            DistanceFormula::Haversine => great_circle_km(a, b),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceFormula::Legacy => "legacy",
            DistanceFormula::Haversine => "haversine",
        }
    }
}

impl fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The formula name is not `legacy` or `haversine`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown distance formula '{0}' (expected 'legacy' or 'haversine')")]
pub struct UnknownFormulaError(pub String);

impl FromStr for DistanceFormula {
    type Err = UnknownFormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(DistanceFormula::Legacy),
            "haversine" => Ok(DistanceFormula::Haversine),
            _ => Err(UnknownFormulaError(s.to_string())),
        }
    }
}
