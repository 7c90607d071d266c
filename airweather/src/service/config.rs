//! Service configuration types.

use crate::config::{ConfigFile, DEFAULT_MAX_RADIUS_KM};
use crate::spatial::DistanceFormula;

/// Configuration for the weather service.
///
/// # Example
///
/// ```
/// use airweather::service::ServiceConfig;
/// use airweather::spatial::DistanceFormula;
///
/// let config = ServiceConfig::builder()
///     .distance_formula(DistanceFormula::Haversine)
///     .max_radius_km(500.0)
///     .build();
///
/// assert_eq!(config.distance_formula(), DistanceFormula::Haversine);
/// assert!(config.seed_defaults());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Formula used by proximity queries
    distance_formula: DistanceFormula,
    /// Largest accepted query radius in km
    max_radius_km: f64,
    /// Load the seed airports on creation and reset
    seed_defaults: bool,
}

impl ServiceConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Get the distance formula.
    pub fn distance_formula(&self) -> DistanceFormula {
        self.distance_formula
    }

    /// Get the maximum query radius in km.
    pub fn max_radius_km(&self) -> f64 {
        self.max_radius_km
    }

    /// Check if the seed airports are loaded.
    pub fn seed_defaults(&self) -> bool {
        self.seed_defaults
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            distance_formula: DistanceFormula::default(),
            max_radius_km: DEFAULT_MAX_RADIUS_KM,
            seed_defaults: true,
        }
    }
}

impl From<&ConfigFile> for ServiceConfig {
    fn from(file: &ConfigFile) -> Self {
        Self {
            distance_formula: file.query.distance_formula,
            max_radius_km: file.query.max_radius_km,
            seed_defaults: file.store.seed_defaults,
        }
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.config.distance_formula = formula;
        self
    }

    pub fn max_radius_km(mut self, max_radius_km: f64) -> Self {
        self.config.max_radius_km = max_radius_km;
        self
    }

    pub fn seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.config.seed_defaults = seed_defaults;
        self
    }

    pub fn build(self) -> ServiceConfig {
        self.config
    }
}
