//! Supported sensor kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// The fixed set of sensors an airport snapshot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Temperature in degrees Celsius.
    Temperature,
    /// Wind speed in km/h.
    Wind,
    /// Relative humidity in percent.
    Humidity,
    /// Precipitation in cm.
    Precipitation,
    /// Pressure in mmHg.
    Pressure,
    /// Cloud cover in percent.
    CloudCover,
}

impl SensorKind {
    /// Every supported kind, in snapshot field order.
    pub const ALL: [SensorKind; 6] = [
        SensorKind::Temperature,
        SensorKind::Wind,
        SensorKind::Humidity,
        SensorKind::Precipitation,
        SensorKind::Pressure,
        SensorKind::CloudCover,
    ];

    /// Lower-case name used in URLs and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Wind => "wind",
            SensorKind::Humidity => "humidity",
            SensorKind::Precipitation => "precipitation",
            SensorKind::Pressure => "pressure",
            SensorKind::CloudCover => "cloudcover",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = WeatherError;

    /// Parse a sensor kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SensorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| WeatherError::UnknownSensorKind(s.to_string()))
    }
}
