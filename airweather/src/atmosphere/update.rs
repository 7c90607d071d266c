//! Range-gated sensor updates.
//!
//! Incoming readings are checked against a physically plausible range for
//! their sensor kind before they touch a snapshot. Out-of-range readings are
//! not errors: the caller gets [`UpdateOutcome::Rejected`] and the snapshot
//! stays exactly as it was.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{DataPoint, SensorKind};
use crate::airport::AirportStore;
use crate::error::WeatherError;

/// Accepted interval for a reading's mean: `min <= mean < max`.
///
/// A missing `max` means the interval is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptedRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl AcceptedRange {
    /// Returns true if `mean` falls inside the range. NaN never does.
    pub fn contains(&self, mean: f64) -> bool {
        if mean.is_nan() || mean < self.min {
            return false;
        }
        match self.max {
            Some(max) => mean < max,
            None => true,
        }
    }
}

impl fmt::Display for AcceptedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}, {})", self.min, max),
            None => write!(f, "[{}, inf)", self.min),
        }
    }
}

/// The accepted mean range for a sensor kind.
pub fn accepted_range(kind: SensorKind) -> AcceptedRange {
    let (min, max) = match kind {
        SensorKind::Wind => (0.0, None),
        SensorKind::Temperature => (-50.0, Some(100.0)),
        SensorKind::Humidity => (0.0, Some(100.0)),
        SensorKind::Pressure => (650.0, Some(800.0)),
        SensorKind::CloudCover => (0.0, Some(100.0)),
        SensorKind::Precipitation => (0.0, Some(100.0)),
    };
    AcceptedRange { min, max }
}

/// Why a reading was ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectReason {
    pub kind: SensorKind,
    pub mean: f64,
    pub range: AcceptedRange,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mean {} outside accepted range {}",
            self.kind, self.mean, self.range
        )
    }
}

/// Result of applying one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// The reading was stored and the snapshot timestamp refreshed.
    Accepted,
    /// The reading was ignored; the snapshot is unchanged.
    Rejected { reason: RejectReason },
}

impl UpdateOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, UpdateOutcome::Accepted)
    }
}

/// Applies sensor readings to airport snapshots held by an [`AirportStore`].
pub struct SensorUpdateEngine {
    store: Arc<AirportStore>,
}

impl SensorUpdateEngine {
    pub fn new(store: Arc<AirportStore>) -> Self {
        Self { store }
    }

    /// Apply a reading, stamping it with the current time if accepted.
    pub fn update(
        &self,
        iata: &str,
        kind: SensorKind,
        point: DataPoint,
    ) -> Result<UpdateOutcome, WeatherError> {
        self.update_at(iata, kind, point, Utc::now())
    }

    /// Apply a reading with an explicit timestamp.
    ///
    /// The range check and the write happen under the same store write lock,
    /// so exactly one slot changes or nothing does.
    pub fn update_at(
        &self,
        iata: &str,
        kind: SensorKind,
        point: DataPoint,
        at: DateTime<Utc>,
    ) -> Result<UpdateOutcome, WeatherError> {
        let range = accepted_range(kind);
        let outcome = self
            .store
            .update_snapshot(iata, |snapshot| {
                if range.contains(point.mean()) {
                    snapshot.record(kind, point, at);
                    UpdateOutcome::Accepted
                } else {
                    UpdateOutcome::Rejected {
                        reason: RejectReason {
                            kind,
                            mean: point.mean(),
                            range,
                        },
                    }
                }
            })
            .ok_or_else(|| WeatherError::NotFound(iata.to_string()))?;

        match &outcome {
            UpdateOutcome::Accepted => debug!(iata = %iata, kind = %kind, "Reading stored"),
            UpdateOutcome::Rejected { reason } => {
                debug!(iata = %iata, reason = %reason, "Reading ignored")
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportRecord;
    use chrono::Duration;
    use proptest::prelude::*;

    fn engine_with_bos() -> (SensorUpdateEngine, Arc<AirportStore>) {
        let store = Arc::new(AirportStore::new());
        store
            .upsert(AirportRecord::new("BOS", 42.364347, -71.005181))
            .unwrap();
        (SensorUpdateEngine::new(Arc::clone(&store)), store)
    }

    fn point(mean: f64) -> DataPoint {
        DataPoint::new(10, 20, 30, mean, 10)
    }

    #[test]
    fn test_range_boundaries() {
        let temp = accepted_range(SensorKind::Temperature);
        assert!(temp.contains(-50.0));
        assert!(temp.contains(99.9));
        assert!(!temp.contains(100.0));
        assert!(!temp.contains(-50.1));

        let pressure = accepted_range(SensorKind::Pressure);
        assert!(pressure.contains(650.0));
        assert!(!pressure.contains(800.0));
        assert!(!pressure.contains(649.9));

        let wind = accepted_range(SensorKind::Wind);
        assert!(wind.contains(0.0));
        assert!(wind.contains(1.0e6));
        assert!(!wind.contains(-0.1));
    }

    #[test]
    fn test_nan_is_never_accepted() {
        for kind in SensorKind::ALL {
            assert!(!accepted_range(kind).contains(f64::NAN), "{}", kind);
        }
    }

    #[test]
    fn test_accepted_reading_is_stored() {
        let (engine, store) = engine_with_bos();
        let outcome = engine.update("bos", SensorKind::Wind, point(22.0)).unwrap();
        assert!(outcome.is_accepted());

        let record = store.find("BOS").unwrap();
        assert_eq!(record.snapshot.wind(), Some(&point(22.0)));
        assert!(record.snapshot.last_update().is_some());
    }

    #[test]
    fn test_rejected_reading_leaves_snapshot_unchanged() {
        let (engine, store) = engine_with_bos();
        let earlier = Utc::now() - Duration::hours(1);
        engine
            .update_at("BOS", SensorKind::Humidity, point(50.0), earlier)
            .unwrap();

        let out_of_range = [
            (SensorKind::Wind, -1.0),
            (SensorKind::Temperature, 100.0),
            (SensorKind::Humidity, 100.0),
            (SensorKind::Pressure, 500.0),
            (SensorKind::CloudCover, -5.0),
            (SensorKind::Precipitation, 250.0),
        ];
        for (kind, mean) in out_of_range {
            let before = store.find("BOS").unwrap().snapshot;
            let outcome = engine.update("BOS", kind, point(mean)).unwrap();
            assert_eq!(
                outcome,
                UpdateOutcome::Rejected {
                    reason: RejectReason {
                        kind,
                        mean,
                        range: accepted_range(kind),
                    }
                }
            );
            let after = store.find("BOS").unwrap().snapshot;
            assert_eq!(before, after, "{} slot changed", kind);
            assert_eq!(after.last_update(), Some(earlier));
        }
    }

    #[test]
    fn test_unknown_airport_is_not_found() {
        let (engine, _) = engine_with_bos();
        let err = engine
            .update("AAA", SensorKind::Wind, point(1.0))
            .unwrap_err();
        assert_eq!(err, WeatherError::NotFound("AAA".to_string()));
    }

    #[test]
    fn test_reject_reason_display() {
        let reason = RejectReason {
            kind: SensorKind::Pressure,
            mean: 900.0,
            range: accepted_range(SensorKind::Pressure),
        };
        assert_eq!(
            reason.to_string(),
            "pressure mean 900 outside accepted range [650, 800)"
        );
    }

    proptest! {
        /// Property: an out-of-range mean never touches the snapshot, for
        /// every sensor kind, whatever was stored before.
        #[test]
        fn prop_out_of_range_mean_is_ignored(
            kind in prop::sample::select(SensorKind::ALL.to_vec()),
            mean in -1.0e6f64..1.0e6f64,
            primed in any::<bool>(),
        ) {
            prop_assume!(!accepted_range(kind).contains(mean));

            let (engine, store) = engine_with_bos();
            let earlier = Utc::now() - Duration::hours(2);
            if primed {
                for other in SensorKind::ALL {
                    let valid = accepted_range(other).min;
                    engine.update_at("BOS", other, point(valid), earlier).unwrap();
                }
            }
            let before = store.find("BOS").unwrap().snapshot;

            let outcome = engine.update("BOS", kind, point(mean)).unwrap();

            let is_rejected = matches!(outcome, UpdateOutcome::Rejected { .. });
            prop_assert!(is_rejected);
            let after = store.find("BOS").unwrap().snapshot;
            prop_assert_eq!(after.last_update(), before.last_update());
            prop_assert_eq!(after, before);
        }
    }
}
