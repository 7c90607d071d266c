//! WeatherService facade implementation.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::config::ServiceConfig;
use crate::airport::{AirportRecord, AirportStore, UpsertOutcome};
use crate::atmosphere::{AtmosphericSnapshot, DataPoint, SensorKind, SensorUpdateEngine, UpdateOutcome};
use crate::error::WeatherError;
use crate::frequency::{FrequencyTracker, StatusSummary};
use crate::spatial::SpatialQueryEngine;

/// High-level facade for airweather operations.
///
/// One instance is built at startup and shared (behind an `Arc`) by every
/// request handler. All operations are synchronous and never block on I/O.
pub struct WeatherService {
    config: ServiceConfig,
    store: Arc<AirportStore>,
    updates: SensorUpdateEngine,
    spatial: SpatialQueryEngine,
    frequency: FrequencyTracker,
}

impl WeatherService {
    /// Create a service with a fresh store, seeded if the config asks for it.
    pub fn new(config: ServiceConfig) -> Self {
        let store = if config.seed_defaults() {
            AirportStore::seeded()
        } else {
            AirportStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a service around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<AirportStore>) -> Self {
        info!(
            airports = store.len(),
            distance_formula = %config.distance_formula(),
            max_radius_km = config.max_radius_km(),
            "Weather service created"
        );
        Self {
            updates: SensorUpdateEngine::new(Arc::clone(&store)),
            spatial: SpatialQueryEngine::new(Arc::clone(&store), config.distance_formula()),
            frequency: FrequencyTracker::new(Arc::clone(&store)),
            store,
            config,
        }
    }

    /// Validate and store an airport, keeping existing weather and counters.
    pub fn add_or_update_airport(&self, record: AirportRecord) -> Result<UpsertOutcome, WeatherError> {
        Ok(self.store.upsert(record)?)
    }

    /// Remove an airport. Unknown codes are ignored.
    pub fn delete_airport(&self, iata: &str) {
        self.store.delete(iata);
    }

    /// Look up one airport.
    pub fn get_airport(&self, iata: &str) -> Result<AirportRecord, WeatherError> {
        self.store
            .find(iata)
            .ok_or_else(|| WeatherError::NotFound(iata.to_string()))
    }

    /// Every stored IATA code.
    pub fn list_airport_codes(&self) -> BTreeSet<String> {
        self.store.list_codes()
    }

    /// Apply one sensor reading.
    ///
    /// Out-of-range readings succeed with [`UpdateOutcome::Rejected`].
    pub fn post_reading(
        &self,
        iata: &str,
        kind: SensorKind,
        point: DataPoint,
    ) -> Result<UpdateOutcome, WeatherError> {
        self.updates.update(iata, kind, point)
    }

    /// Weather near an airport.
    ///
    /// The radius must be finite, non-negative and no larger than the
    /// configured maximum. Each successful call counts one request against
    /// the origin airport and the radius.
    pub fn query_weather(
        &self,
        iata: &str,
        radius_km: f64,
    ) -> Result<Vec<AtmosphericSnapshot>, WeatherError> {
        let origin = self.get_airport(iata)?;

        if !radius_km.is_finite() || radius_km < 0.0 || radius_km > self.config.max_radius_km() {
            return Err(WeatherError::InvalidRadius(radius_km));
        }

        self.frequency.record_query(&origin.iata, radius_km);
        let snapshots = self.spatial.nearby(&origin, radius_km);
        debug!(iata = %origin.iata, radius_km, results = snapshots.len(), "Weather query");
        Ok(snapshots)
    }

    /// Health and usage summary.
    pub fn status_summary(&self) -> StatusSummary {
        self.frequency.summarize()
    }

    /// Restore the startup state: seed (or empty) store and no recorded radii.
    pub fn reset(&self) {
        if self.config.seed_defaults() {
            self.store.reset();
        } else {
            self.store.clear();
        }
        self.frequency.reset();
        info!("Weather service reset");
    }

    /// The shared airport store.
    pub fn store(&self) -> &Arc<AirportStore> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
