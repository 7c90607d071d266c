//! Radius-bounded neighbour search over an [`AirportStore`].

use std::sync::Arc;

use super::DistanceFormula;
use crate::airport::{AirportRecord, AirportStore};
use crate::atmosphere::AtmosphericSnapshot;

/// Finds the weather near an airport.
pub struct SpatialQueryEngine {
    store: Arc<AirportStore>,
    formula: DistanceFormula,
}

impl SpatialQueryEngine {
    pub fn new(store: Arc<AirportStore>, formula: DistanceFormula) -> Self {
        Self { store, formula }
    }

    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Snapshots of airports within `radius_km` of `origin`.
    ///
    /// A zero radius returns only the origin's snapshot. Otherwise every
    /// airport (origin included) with a non-empty snapshot at distance
    /// `<= radius_km` is returned; if none qualify the origin's snapshot is
    /// returned alone, even when empty. Order is unspecified.
    ///
    /// The scan runs against one point-in-time copy of the store.
    pub fn nearby(&self, origin: &AirportRecord, radius_km: f64) -> Vec<AtmosphericSnapshot> {
        if radius_km == 0.0 {
            return vec![origin.snapshot.clone()];
        }

        let found: Vec<AtmosphericSnapshot> = self
            .store
            .list_all()
            .into_iter()
            .filter(|record| !record.snapshot.is_empty())
            .filter(|record| self.formula.distance(origin, record) <= radius_km)
            .map(|record| record.snapshot)
            .collect();

        if found.is_empty() {
            vec![origin.snapshot.clone()]
        } else {
            found
        }
    }
}
