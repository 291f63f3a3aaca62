//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use vehicles_query::Dataset;

/// Path to the eight-record catalog under `tests/fixtures`.
///
/// The Mercedes-Benz record carries an impossible registration date
/// (`31/13/2019`) and the Toyota Yaris an ISO date with a `null` trim.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("vehicles.json")
}

pub fn fixture_dataset() -> Dataset {
    Dataset::from_path(fixture_path()).expect("fixture catalog loads")
}
