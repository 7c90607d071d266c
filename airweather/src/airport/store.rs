//! AirportStore: the keyed, lock-guarded record collection.
//!
//! # Thread Safety
//!
//! All records sit behind one `parking_lot::RwLock`. Readers take the shared
//! lock and copy records out; every mutation (upsert, delete, sensor update,
//! counter increment) runs under the exclusive lock. A reader therefore sees
//! each record either before or after a write, never half-applied.

use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use super::validation::{validate, ValidationError};
use super::{normalize_code, AirportRecord};
use crate::atmosphere::AtmosphericSnapshot;

/// Whether an upsert created a record or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// The airports loaded at startup.
pub fn default_seed() -> Vec<AirportRecord> {
    vec![
        AirportRecord::new("BOS", 42.364347, -71.005181),
        AirportRecord::new("EWR", 40.6925, -74.168667),
        AirportRecord::new("JFK", 40.639751, -73.778925),
        AirportRecord::new("LGA", 40.777245, -73.872608),
        AirportRecord::new("MMU", 40.79935, -74.4148747),
    ]
}

/// Keyed collection of airport records.
///
/// Keys are upper-cased IATA codes; every lookup is case-insensitive.
#[derive(Debug, Default)]
pub struct AirportStore {
    records: RwLock<HashMap<String, AirportRecord>>,
}

impl AirportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the [`default_seed`] airports.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.reset();
        store
    }

    /// Replace the whole collection with the given records.
    ///
    /// Records are validated and keyed before the lock is taken, then swapped
    /// in at once. Invalid records are skipped and returned.
    pub fn seed_records(
        &self,
        records: impl IntoIterator<Item = AirportRecord>,
    ) -> Vec<ValidationError> {
        let mut fresh = HashMap::new();
        let mut rejected = Vec::new();
        for record in records {
            match prepare(record) {
                Ok(record) => {
                    fresh.insert(record.iata.clone(), record);
                }
                Err(e) => rejected.push(e),
            }
        }

        let count = fresh.len();
        *self.records.write() = fresh;
        debug!(count, "Airport store seeded");
        rejected
    }

    /// Drop every record and reload the default seed.
    pub fn reset(&self) {
        self.seed_records(default_seed());
    }

    /// Drop every record.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Validate and insert a record, or update an existing one's metadata.
    ///
    /// On update the stored snapshot and request counter are kept.
    pub fn upsert(&self, record: AirportRecord) -> Result<UpsertOutcome, ValidationError> {
        let record = prepare(record)?;

        let mut records = self.records.write();
        match records.get_mut(&record.iata) {
            Some(existing) => {
                existing.replace_metadata(record);
                debug!(iata = %existing.iata, "Airport updated");
                Ok(UpsertOutcome::Updated)
            }
            None => {
                debug!(iata = %record.iata, "Airport inserted");
                records.insert(record.iata.clone(), record);
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// Remove a record. Returns true if one was removed.
    ///
    /// Deleting an unknown code is not an error.
    pub fn delete(&self, iata: &str) -> bool {
        let removed = self.records.write().remove(&normalize_code(iata)).is_some();
        if removed {
            debug!(iata = %iata, "Airport deleted");
        }
        removed
    }

    /// Look up a record by code, returning a copy.
    pub fn find(&self, iata: &str) -> Option<AirportRecord> {
        self.records.read().get(&normalize_code(iata)).cloned()
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.records.read().contains_key(&normalize_code(iata))
    }

    /// Point-in-time copy of every record, in no particular order.
    pub fn list_all(&self) -> Vec<AirportRecord> {
        self.records.read().values().cloned().collect()
    }

    /// All stored codes.
    pub fn list_codes(&self) -> BTreeSet<String> {
        self.records.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Run `f` against a record's snapshot under the write lock.
    ///
    /// Returns `None` without calling `f` if the code is unknown.
    pub fn update_snapshot<R>(
        &self,
        iata: &str,
        f: impl FnOnce(&mut AtmosphericSnapshot) -> R,
    ) -> Option<R> {
        let mut records = self.records.write();
        records
            .get_mut(&normalize_code(iata))
            .map(|record| f(&mut record.snapshot))
    }

    /// Add one to a record's request counter, returning the new value.
    pub fn increment_request_count(&self, iata: &str) -> Option<u64> {
        let mut records = self.records.write();
        records.get_mut(&normalize_code(iata)).map(|record| {
            record.request_count += 1;
            record.request_count
        })
    }
}

/// Validate a record and normalize its key.
fn prepare(mut record: AirportRecord) -> Result<AirportRecord, ValidationError> {
    validate(&record)?;
    record.iata = normalize_code(&record.iata);
    record.snapshot = AtmosphericSnapshot::new();
    record.request_count = 0;
    Ok(record)
}
