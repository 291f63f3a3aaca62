//! Error types for the vehicles-query crate.

use std::io;

use thiserror::Error;

/// Errors that can occur when loading the catalog or executing queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A record could not be projected into its caller-facing shape.
    ///
    /// Records with malformed dates are skipped while filtering, so this
    /// surfacing from [`QueryExecutor::execute`](crate::QueryExecutor::execute)
    /// points at a defect rather than bad data.
    #[error("cannot map field '{field}' with value {value:?}: {reason}")]
    Mapping {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The catalog file could not be read.
    #[error("failed to read vehicle data: {0}")]
    Io(#[from] io::Error),

    /// The catalog file is not a valid JSON array of vehicle records.
    #[error("invalid vehicle data: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    /// Create a mapping error.
    pub fn mapping(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Mapping {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
