//! Per-airport bundle of the latest sensor readings.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{DataPoint, SensorKind};

/// Snapshots updated within this many hours count as recent.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// The latest accepted reading for each sensor kind at one airport.
///
/// `last_update` is set on every accepted write (and on construction when
/// any slot is filled). Rejected readings never reach the snapshot, so the
/// timestamp always reflects the most recent accepted write.
///
/// The timestamp is internal bookkeeping and is not part of the JSON shape.
/// A snapshot read from JSON is stamped with the time it was read if any
/// slot is filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SnapshotReadings")]
pub struct AtmosphericSnapshot {
    temperature: Option<DataPoint>,
    wind: Option<DataPoint>,
    humidity: Option<DataPoint>,
    precipitation: Option<DataPoint>,
    pressure: Option<DataPoint>,
    cloud_cover: Option<DataPoint>,
    #[serde(skip)]
    last_update: Option<DateTime<Utc>>,
}

impl AtmosphericSnapshot {
    /// Create an empty snapshot with no update time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot pre-filled with readings.
    ///
    /// The update time is set to now if at least one reading is given.
    pub fn from_readings(readings: impl IntoIterator<Item = (SensorKind, DataPoint)>) -> Self {
        let now = Utc::now();
        let mut snapshot = Self::new();
        for (kind, point) in readings {
            snapshot.record(kind, point, now);
        }
        snapshot
    }

    /// Get the reading for a sensor kind.
    pub fn get(&self, kind: SensorKind) -> Option<&DataPoint> {
        match kind {
            SensorKind::Temperature => self.temperature.as_ref(),
            SensorKind::Wind => self.wind.as_ref(),
            SensorKind::Humidity => self.humidity.as_ref(),
            SensorKind::Precipitation => self.precipitation.as_ref(),
            SensorKind::Pressure => self.pressure.as_ref(),
            SensorKind::CloudCover => self.cloud_cover.as_ref(),
        }
    }

    pub fn temperature(&self) -> Option<&DataPoint> {
        self.temperature.as_ref()
    }

    pub fn wind(&self) -> Option<&DataPoint> {
        self.wind.as_ref()
    }

    pub fn humidity(&self) -> Option<&DataPoint> {
        self.humidity.as_ref()
    }

    pub fn precipitation(&self) -> Option<&DataPoint> {
        self.precipitation.as_ref()
    }

    pub fn pressure(&self) -> Option<&DataPoint> {
        self.pressure.as_ref()
    }

    pub fn cloud_cover(&self) -> Option<&DataPoint> {
        self.cloud_cover.as_ref()
    }

    /// Time of the most recent accepted write, if any.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Returns true if no sensor slot holds a reading.
    pub fn is_empty(&self) -> bool {
        SensorKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }

    /// Number of filled sensor slots.
    pub fn reading_count(&self) -> usize {
        SensorKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_some())
            .count()
    }

    /// Returns true if the snapshot holds data written within the last
    /// [`RECENT_WINDOW_HOURS`] hours before `now`.
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        if self.is_empty() {
            return false;
        }
        let cutoff = now - Duration::hours(RECENT_WINDOW_HOURS);
        self.last_update.is_some_and(|updated| updated > cutoff)
    }

    /// Store a reading unconditionally and stamp the update time.
    ///
    /// Range gates live in [`super::SensorUpdateEngine`]; this is the raw
    /// write it performs once a reading has been accepted.
    pub fn record(&mut self, kind: SensorKind, point: DataPoint, at: DateTime<Utc>) {
        *self.slot_mut(kind) = Some(point);
        self.last_update = Some(at);
    }

    fn slot_mut(&mut self, kind: SensorKind) -> &mut Option<DataPoint> {
        match kind {
            SensorKind::Temperature => &mut self.temperature,
            SensorKind::Wind => &mut self.wind,
            SensorKind::Humidity => &mut self.humidity,
            SensorKind::Precipitation => &mut self.precipitation,
            SensorKind::Pressure => &mut self.pressure,
            SensorKind::CloudCover => &mut self.cloud_cover,
        }
    }
}

/// JSON form of a snapshot: the six slots without a timestamp.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SnapshotReadings {
    temperature: Option<DataPoint>,
    wind: Option<DataPoint>,
    humidity: Option<DataPoint>,
    precipitation: Option<DataPoint>,
    pressure: Option<DataPoint>,
    cloud_cover: Option<DataPoint>,
}

impl From<SnapshotReadings> for AtmosphericSnapshot {
    fn from(readings: SnapshotReadings) -> Self {
        let slots = [
            (SensorKind::Temperature, readings.temperature),
            (SensorKind::Wind, readings.wind),
            (SensorKind::Humidity, readings.humidity),
            (SensorKind::Precipitation, readings.precipitation),
            (SensorKind::Pressure, readings.pressure),
            (SensorKind::CloudCover, readings.cloud_cover),
        ];
        Self::from_readings(
            slots
                .into_iter()
                .filter_map(|(kind, point)| point.map(|point| (kind, point))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind() -> DataPoint {
        DataPoint::new(10, 20, 30, 22.0, 10)
    }

    #[test]
    fn test_new_snapshot_is_empty() {
        let snapshot = AtmosphericSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.reading_count(), 0);
        assert!(snapshot.last_update().is_none());
    }

    #[test]
    fn test_from_readings_stamps_update_time() {
        let snapshot = AtmosphericSnapshot::from_readings([(SensorKind::Wind, wind())]);
        assert!(!snapshot.is_empty());
        assert!(snapshot.last_update().is_some());
        assert_eq!(snapshot.wind(), Some(&wind()));
    }

    #[test]
    fn test_from_no_readings_has_no_update_time() {
        let snapshot = AtmosphericSnapshot::from_readings([]);
        assert!(snapshot.last_update().is_none());
    }

    #[test]
    fn test_record_touches_one_slot() {
        let mut snapshot = AtmosphericSnapshot::new();
        let at = Utc::now();
        snapshot.record(SensorKind::CloudCover, wind(), at);

        assert_eq!(snapshot.get(SensorKind::CloudCover), Some(&wind()));
        assert_eq!(snapshot.reading_count(), 1);
        assert_eq!(snapshot.last_update(), Some(at));
        for kind in SensorKind::ALL {
            if kind != SensorKind::CloudCover {
                assert!(snapshot.get(kind).is_none(), "{} should be empty", kind);
            }
        }
    }

    #[test]
    fn test_recent_window() {
        let now = Utc::now();
        let mut snapshot = AtmosphericSnapshot::new();
        assert!(!snapshot.is_recent(now));

        snapshot.record(SensorKind::Wind, wind(), now - Duration::hours(23));
        assert!(snapshot.is_recent(now));

        snapshot.record(SensorKind::Wind, wind(), now - Duration::hours(25));
        assert!(!snapshot.is_recent(now));
    }

    #[test]
    fn test_json_uses_camel_case_and_hides_timestamp() {
        let snapshot = AtmosphericSnapshot::from_readings([(SensorKind::CloudCover, wind())]);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json.get("cloudCover").is_some_and(|v| !v.is_null()));
        assert!(json.get("wind").is_some_and(|v| v.is_null()));
        assert!(json.get("lastUpdate").is_none());
    }

    #[test]
    fn test_deserialized_snapshot_is_stamped() {
        let before = Utc::now();
        let snapshot: AtmosphericSnapshot = serde_json::from_str(
            r#"{"wind":{"first":10,"second":20,"third":30,"mean":22.0,"count":10},"pressure":null}"#,
        )
        .unwrap();

        assert_eq!(snapshot.wind(), Some(&wind()));
        assert!(snapshot.pressure().is_none());
        assert!(snapshot.last_update().is_some_and(|at| at >= before));
        assert!(snapshot.is_recent(Utc::now()));
    }

    #[test]
    fn test_deserialized_empty_snapshot_has_no_update_time() {
        let snapshot: AtmosphericSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.last_update().is_none());

        let round_trip: AtmosphericSnapshot =
            serde_json::from_value(serde_json::to_value(AtmosphericSnapshot::new()).unwrap())
                .unwrap();
        assert_eq!(round_trip, AtmosphericSnapshot::new());
    }
}
