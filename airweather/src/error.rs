//! Error types shared by the core weather operations.

use thiserror::Error;

use crate::airport::ValidationError;

/// Errors returned by store, update and query operations.
///
/// Every variant is a recoverable outcome reported to the caller. Sensor
/// readings outside their accepted range are not errors; see
/// [`crate::atmosphere::UpdateOutcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    /// Airport metadata failed validation; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced IATA code is not in the store.
    #[error("Airport '{0}' not found")]
    NotFound(String),

    /// The sensor kind name is not one of the supported kinds.
    #[error("Unknown sensor kind '{0}'")]
    UnknownSensorKind(String),

    /// The query radius is negative, not finite, or above the configured maximum.
    #[error("Invalid query radius: {0} km")]
    InvalidRadius(f64),
}

impl WeatherError {
    /// Returns true if the error refers to something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::UnknownSensorKind(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportField;

    #[test]
    fn test_not_found_display() {
        let err = WeatherError::NotFound("AAA".to_string());
        assert_eq!(err.to_string(), "Airport 'AAA' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: WeatherError = ValidationError::new(AirportField::Dst, "X").into();
        assert_eq!(err.to_string(), "Invalid DST code: 'X'");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unknown_sensor_kind_counts_as_not_found() {
        assert!(WeatherError::UnknownSensorKind("fog".to_string()).is_not_found());
        assert!(!WeatherError::InvalidRadius(-1.0).is_not_found());
    }
}
