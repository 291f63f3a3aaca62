//! The in-memory vehicle catalog.
//!
//! A [`Dataset`] is loaded once and never mutated afterwards. Cloning it only
//! bumps a reference count, so one instance can be handed to every caller
//! that needs to query it, across threads, without locking.
//!
//! Besides feeding [`QueryExecutor`](crate::QueryExecutor), the dataset
//! answers a handful of direct lookups that need no specification:
//! listing, plain paging, exact make/model matches and unified search.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::record::VehicleRecord;
use crate::text::{contains_ignore_case, eq_ignore_case};

/// Read-only, shareable handle to the loaded catalog.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[VehicleRecord]>,
}

impl Dataset {
    /// Wraps an already loaded set of records, keeping their order.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Dataset {
            records: records.into(),
        }
    }

    /// Loads a JSON array of records from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<VehicleRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Loads a JSON array of records from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), records = dataset.len(), "loaded vehicle catalog");
        Ok(dataset)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in load order.
    pub fn all(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// One page of records without any filtering.
    ///
    /// `page_number` is 1-based; page 0 is treated as page 1. A page past the
    /// end is empty.
    pub fn page(&self, page_number: usize, page_size: usize) -> &[VehicleRecord] {
        let start = page_number
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }

    /// Records whose make equals `make`, ignoring case.
    pub fn by_make(&self, make: &str) -> Vec<&VehicleRecord> {
        self.records
            .iter()
            .filter(|v| eq_ignore_case(&v.make, make))
            .collect()
    }

    /// Records whose model equals `model`, ignoring case.
    pub fn by_model(&self, model: &str) -> Vec<&VehicleRecord> {
        self.records
            .iter()
            .filter(|v| eq_ignore_case(&v.model, model))
            .collect()
    }

    /// Unified search across every text field.
    ///
    /// A record qualifies if any of make, model, trim, colour, transmission
    /// or fuel type contains `term`, ignoring case. An empty term returns the
    /// whole catalog.
    pub fn search(&self, term: &str) -> Vec<&VehicleRecord> {
        if term.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|v| {
                [
                    &v.make,
                    &v.model,
                    &v.trim,
                    &v.colour,
                    &v.transmission,
                    &v.fuel_type,
                ]
                .into_iter()
                .any(|field| contains_ignore_case(field, term))
            })
            .collect()
    }
}

impl From<Vec<VehicleRecord>> for Dataset {
    fn from(records: Vec<VehicleRecord>) -> Self {
        Dataset::from_records(records)
    }
}
