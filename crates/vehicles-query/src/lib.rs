//! Vehicles Query - filtered, paginated queries over an in-memory vehicle
//! catalog.
//!
//! The crate provides a fluent API for describing a query and an executor
//! that evaluates it against a catalog loaded once at startup. It covers:
//!
//! - Inclusive range filters over price, CO2 level, engine size, mileage and
//!   registration date
//! - Case-insensitive exact matches on the text fields
//! - 1-based pagination with sticky defaults
//! - Direct catalog lookups, including a unified substring search
//! - A standalone Levenshtein edit distance
//!
//! # Quick Start
//!
//! ```rust
//! use vehicles_query::{Dataset, QueryExecutor, QuerySpecification, VehicleRecord};
//!
//! let dataset = Dataset::from_records(vec![
//!     VehicleRecord {
//!         make: "Mazda".into(),
//!         model: "5".into(),
//!         colour: "Red".into(),
//!         mileage: 50_231,
//!         date_first_reg: "19/04/2022".into(),
//!         ..Default::default()
//!     },
//!     VehicleRecord {
//!         make: "Ford".into(),
//!         model: "Focus".into(),
//!         colour: "Black".into(),
//!         mileage: 20_000,
//!         date_first_reg: "20/05/2023".into(),
//!         ..Default::default()
//!     },
//! ]);
//!
//! let spec = QuerySpecification::new()
//!     .with_make(Some("mazda"))
//!     .with_mileage(None, Some(60_000));
//!
//! let results = QueryExecutor::new(&dataset).execute(&spec).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].model, "5");
//! ```
//!
//! # Execution Semantics
//!
//! ```text
//! match = (every range contains its field)
//!       ∧ (every set text criterion equals its field, ignoring case)
//!       ∧ (registration date parses and lies in the date range)
//! ```
//!
//! Matches keep catalog load order. The page is cut from the matches, then
//! each survivor is projected into a [`ResultProjection`] with a parsed date.
//!
//! # Malformed Dates
//!
//! | Stage | Outcome |
//! |-------|---------|
//! | Filtering | record skipped, `warn!` emitted |
//! | Projection | [`QueryError::Mapping`] returned |

mod dataset;
mod distance;
mod error;
mod executor;
mod page;
mod range;
mod record;
mod request;
mod spec;
mod text;

// Re-export public API
pub use dataset::Dataset;
pub use distance::edit_distance;
pub use error::{QueryError, Result};
pub use executor::{matches, QueryExecutor};
pub use page::PageSpec;
pub use range::RangeFilter;
pub use record::{parse_registration_date, ResultProjection, VehicleRecord, DATE_FORMATS};
pub use request::{QueryRequest, ValidationErrors};
pub use spec::{QuerySpecification, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use text::{contains_ignore_case, eq_ignore_case};
