//! FrequencyTracker: request counters and the radius histogram.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use super::summary::{radius_histogram, StatusSummary};
use crate::airport::AirportStore;

/// Histogram key for a query radius.
///
/// Stores the raw bits of the radius so distinct values stay distinct.
/// Negative zero is folded into zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadiusKey(u64);

impl RadiusKey {
    pub fn new(radius_km: f64) -> Self {
        let radius_km = if radius_km == 0.0 { 0.0 } else { radius_km };
        Self(radius_km.to_bits())
    }

    pub fn radius_km(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Tracks how often each airport and each radius is queried.
///
/// Histogram increments go through the `DashMap` entry API and are atomic
/// per key.
pub struct FrequencyTracker {
    store: Arc<AirportStore>,
    radius_freq: DashMap<RadiusKey, u64>,
}

impl FrequencyTracker {
    pub fn new(store: Arc<AirportStore>) -> Self {
        Self {
            store,
            radius_freq: DashMap::new(),
        }
    }

    /// Count one query against `iata` with the given radius.
    ///
    /// Unknown codes are ignored and leave the histogram untouched. Returns
    /// true if the query was counted.
    pub fn record_query(&self, iata: &str, radius_km: f64) -> bool {
        let Some(count) = self.store.increment_request_count(iata) else {
            return false;
        };
        *self
            .radius_freq
            .entry(RadiusKey::new(radius_km))
            .or_insert(0) += 1;
        debug!(iata = %iata, radius_km, request_count = count, "Query recorded");
        true
    }

    /// Copy of the raw histogram as `(radius, count)` pairs.
    pub fn radius_counts(&self) -> Vec<(f64, u64)> {
        self.radius_freq
            .iter()
            .map(|entry| (entry.key().radius_km(), *entry.value()))
            .collect()
    }

    /// Build the status report as of now.
    pub fn summarize(&self) -> StatusSummary {
        self.summarize_at(Utc::now())
    }

    /// Build the status report as of `now`.
    pub fn summarize_at(&self, now: DateTime<Utc>) -> StatusSummary {
        let records = self.store.list_all();

        let datasize = records
            .iter()
            .filter(|record| record.snapshot.is_recent(now))
            .count();

        let total = records.len() as f64;
        let iata_freq = records
            .iter()
            .map(|record| (record.iata.clone(), record.request_count as f64 / total))
            .collect();

        StatusSummary {
            datasize,
            iata_freq,
            radius_freq: radius_histogram(&self.radius_counts()),
        }
    }

    /// Forget every recorded radius.
    pub fn reset(&self) {
        self.radius_freq.clear();
    }
}
