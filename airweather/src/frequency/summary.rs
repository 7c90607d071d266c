//! The status report served by `/query/ping`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Histogram upper bound used when no radius exceeds it.
pub const DEFAULT_HISTOGRAM_UPPER_BOUND: usize = 999;

/// Largest histogram length ever allocated.
pub const MAX_HISTOGRAM_LEN: usize = 1 << 20;

/// Health and usage summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    /// Airports holding a non-empty snapshot updated in the last 24 hours.
    pub datasize: usize,
    /// Request count of each airport divided by the number of airports.
    pub iata_freq: BTreeMap<String, f64>,
    /// Coarse radius histogram, see [`radius_histogram`].
    pub radius_freq: Vec<u64>,
}

/// Fold `(radius, count)` pairs into a histogram.
///
/// The array has `max(max floor(radius), 999) + 1` entries, and each pair
/// adds its count at index `floor(radius) % 10`. Distinct radii with the same
/// last digit share a bucket, so only the first ten entries are ever
/// non-zero.
pub fn radius_histogram(counts: &[(f64, u64)]) -> Vec<u64> {
    let upper = counts
        .iter()
        .map(|(radius, _)| bucket_base(*radius))
        .max()
        .unwrap_or(0)
        .max(DEFAULT_HISTOGRAM_UPPER_BOUND);
    let len = upper.saturating_add(1).min(MAX_HISTOGRAM_LEN);

    let mut histogram = vec![0u64; len];
    for (radius, count) in counts {
        histogram[bucket_base(*radius) % 10] += count;
    }
    histogram
}

/// `floor(radius)` as an index; negative and NaN radii land on 0.
fn bucket_base(radius: f64) -> usize {
    // `as` saturates: NaN becomes 0 and huge values become usize::MAX
    radius.floor().max(0.0) as usize
}
