//! Query execution.
//!
//! [`QueryExecutor`] evaluates a [`QuerySpecification`] against a
//! [`Dataset`]. Every record runs through the same predicate chain:
//!
//! ```text
//! numeric ranges (price, CO2 level, engine size, mileage)
//!   ∧ exact text matches (only the ones that are set)
//!   ∧ registration date parses ∧ date in range
//! ```
//!
//! Matching records are then paged and projected, in load order.
//!
//! Dates are handled twice, with different policies. While filtering, a
//! record whose date text does not parse is dropped and a warning is logged.
//! During projection the same failure is a [`QueryError::Mapping`] that
//! aborts the call.

use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::record::{ResultProjection, VehicleRecord};
use crate::spec::QuerySpecification;
use crate::text::eq_ignore_case;

/// Runs specifications against a shared dataset.
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'d> {
    dataset: &'d Dataset,
}

impl<'d> QueryExecutor<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        QueryExecutor { dataset }
    }

    /// Returns the requested page of matching records as projections.
    ///
    /// Results follow the dataset's load order; no sorting is applied.
    pub fn execute(&self, spec: &QuerySpecification) -> Result<Vec<ResultProjection>> {
        debug!(?spec, "executing vehicle query");

        let page = spec.page();
        let results = self
            .dataset
            .all()
            .iter()
            .filter(|record| matches(spec, record))
            .skip(page.offset())
            .take(page.page_size())
            .map(ResultProjection::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(results = results.len(), "vehicle query complete");
        Ok(results)
    }

    /// Counts every matching record, ignoring pagination.
    pub fn count(&self, spec: &QuerySpecification) -> usize {
        self.dataset
            .all()
            .iter()
            .filter(|record| matches(spec, record))
            .count()
    }
}

/// Tests a single record against a specification.
///
/// Logs a warning and returns `false` for a record whose registration date
/// cannot be parsed.
pub fn matches(spec: &QuerySpecification, record: &VehicleRecord) -> bool {
    if !matches_ranges(spec, record) || !matches_text(spec, record) {
        return false;
    }

    match record.registration_date() {
        Some(date) => spec.date_first_registered().is_in_range(date),
        None => {
            warn!(
                make = %record.make,
                model = %record.model,
                colour = %record.colour,
                date_first_reg = %record.date_first_reg,
                "skipping vehicle with unparseable registration date, expected DD/MM/YYYY"
            );
            false
        }
    }
}

fn matches_ranges(spec: &QuerySpecification, record: &VehicleRecord) -> bool {
    spec.price().is_in_range(record.price)
        && spec.co2_level().is_in_range(record.co2_level)
        && spec.engine_size().is_in_range(record.engine_size)
        && spec.mileage().is_in_range(record.mileage)
}

fn matches_text(spec: &QuerySpecification, record: &VehicleRecord) -> bool {
    [
        (spec.make(), &record.make),
        (spec.model(), &record.model),
        (spec.trim(), &record.trim),
        (spec.colour(), &record.colour),
        (spec.transmission(), &record.transmission),
        (spec.fuel_type(), &record.fuel_type),
    ]
    .into_iter()
    .all(|(wanted, actual)| wanted.map_or(true, |wanted| eq_ignore_case(actual, wanted)))
}
