//! Summarized sensor measurements.

use serde::{Deserialize, Serialize};

/// A collected sensor measurement, including some information about the
/// range of collected values.
///
/// `DataPoint` is a plain value: it is copied on every write into a
/// snapshot and compared field by field. Fields are read-only once built.
///
/// Missing JSON fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoint {
    first: i32,
    second: i32,
    third: i32,
    mean: f64,
    count: i32,
}

impl DataPoint {
    /// Create a data point from its markers, mean and sample count.
    pub fn new(first: i32, second: i32, third: i32, mean: f64, count: i32) -> Self {
        Self {
            first,
            second,
            third,
            mean,
            count,
        }
    }

    /// Start building a data point; unset fields are zero.
    pub fn builder() -> DataPointBuilder {
        DataPointBuilder::default()
    }

    /// First marker (lowest percentile-like value).
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Second marker (median-like value).
    pub fn second(&self) -> i32 {
        self.second
    }

    /// Third marker (highest percentile-like value).
    pub fn third(&self) -> i32 {
        self.third
    }

    /// Mean of the collected samples. This is the value range gates check.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Number of samples summarized.
    pub fn count(&self) -> i32 {
        self.count
    }
}

/// Builder for [`DataPoint`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DataPointBuilder {
    point: DataPoint,
}

impl DataPointBuilder {
    pub fn with_first(mut self, first: i32) -> Self {
        self.point.first = first;
        self
    }

    pub fn with_second(mut self, second: i32) -> Self {
        self.point.second = second;
        self
    }

    pub fn with_third(mut self, third: i32) -> Self {
        self.point.third = third;
        self
    }

    pub fn with_mean(mut self, mean: f64) -> Self {
        self.point.mean = mean;
        self
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.point.count = count;
        self
    }

    pub fn build(self) -> DataPoint {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_every_field() {
        let point = DataPoint::new(10, 20, 30, 22.5, 10);

        assert_eq!(point.first(), 10);
        assert_eq!(point.second(), 20);
        assert_eq!(point.third(), 30);
        assert_eq!(point.mean(), 22.5);
        assert_eq!(point.count(), 10);
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = DataPoint::builder()
            .with_count(10)
            .with_first(10)
            .with_second(20)
            .with_third(30)
            .with_mean(22.0)
            .build();

        assert_eq!(built, DataPoint::new(10, 20, 30, 22.0, 10));
    }

    #[test]
    fn test_builder_defaults_to_zero() {
        let point = DataPoint::builder().with_mean(-3.25).build();
        assert_eq!(point, DataPoint::new(0, 0, 0, -3.25, 0));
    }

    #[test]
    fn test_copies_compare_by_value() {
        let original = DataPoint::new(1, 2, 3, 2.0, 1);
        let copy = original;
        assert_eq!(original, copy);
        assert_ne!(original, DataPoint::new(1, 2, 3, 2.5, 1));
    }

    #[test]
    fn test_json_shape() {
        let point = DataPoint::new(10, 20, 30, 22.0, 10);
        let json = serde_json::to_value(point).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"first": 10, "second": 20, "third": 30, "mean": 22.0, "count": 10})
        );
    }

    #[test]
    fn test_json_missing_fields_default_to_zero() {
        let point: DataPoint = serde_json::from_str(r#"{"mean": 40.0}"#).unwrap();
        assert_eq!(point, DataPoint::new(0, 0, 0, 40.0, 0));
    }
}
