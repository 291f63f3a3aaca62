//! Inbound query requests and their validation.
//!
//! [`QueryRequest`] is the flat, all-optional shape a transport layer binds
//! from its input. It is checked with [`QueryRequest::validate`] and turned
//! into a [`QuerySpecification`] with [`QueryRequest::into_spec`], which
//! refuses to build anything from an invalid request.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::spec::{QuerySpecification, MAX_PAGE_SIZE};

/// An unvalidated query as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub colour: Option<String>,
    pub min_co2_level: Option<i32>,
    pub max_co2_level: Option<i32>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub min_engine_size: Option<i32>,
    pub max_engine_size: Option<i32>,
    pub min_date_first_registered: Option<NaiveDate>,
    pub max_date_first_registered: Option<NaiveDate>,
    pub min_mileage: Option<i32>,
    pub max_mileage: Option<i32>,
}

fn check_range<T: PartialOrd>(
    errors: &mut ValidationErrors,
    min: Option<T>,
    max: Option<T>,
    min_name: &str,
    max_name: &str,
) {
    if let (Some(min), Some(max)) = (min, max) {
        if max < min {
            errors.add_error(max_name, format!("{max_name} must be greater than {min_name}."));
        }
    }
}

impl QueryRequest {
    /// Checks the request, collecting every problem found.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.page_number == Some(0) {
            errors.add_error("page_number", "page_number must be at least 1.");
        }
        if self.page_size == Some(0) {
            errors.add_error("page_size", "page_size must be at least 1.");
        }

        check_range(&mut errors, self.min_price, self.max_price, "min_price", "max_price");
        check_range(
            &mut errors,
            self.min_co2_level,
            self.max_co2_level,
            "min_co2_level",
            "max_co2_level",
        );
        check_range(
            &mut errors,
            self.min_engine_size,
            self.max_engine_size,
            "min_engine_size",
            "max_engine_size",
        );
        check_range(
            &mut errors,
            self.min_date_first_registered,
            self.max_date_first_registered,
            "min_date_first_registered",
            "max_date_first_registered",
        );
        check_range(&mut errors, self.min_mileage, self.max_mileage, "min_mileage", "max_mileage");

        errors
    }

    /// Validates the request and builds the matching specification.
    ///
    /// Page sizes above [`MAX_PAGE_SIZE`] are capped.
    pub fn into_spec(self) -> Result<QuerySpecification, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(errors);
        }

        Ok(QuerySpecification::new()
            .with_page_number(self.page_number)
            .with_page_size(self.page_size.map(|size| size.min(MAX_PAGE_SIZE)))
            .with_price(self.min_price, self.max_price)
            .with_make(self.make.as_deref())
            .with_model(self.model.as_deref())
            .with_trim(self.trim.as_deref())
            .with_colour(self.colour.as_deref())
            .with_co2_level(self.min_co2_level, self.max_co2_level)
            .with_transmission(self.transmission.as_deref())
            .with_fuel_type(self.fuel_type.as_deref())
            .with_engine_size(self.min_engine_size, self.max_engine_size)
            .with_date_first_registered(
                self.min_date_first_registered,
                self.max_date_first_registered,
            )
            .with_mileage(self.min_mileage, self.max_mileage))
    }
}

/// Field-keyed validation failures.
///
/// Each key is a request field name; each value lists the messages recorded
/// against it, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded against one field.
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid query request")?;
        for (field, messages) in &self.errors {
            for message in messages {
                write!(f, "; {field}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_request_is_valid() {
        assert!(QueryRequest::default().validate().is_valid());
    }

    #[test]
    fn inverted_ranges_are_keyed_by_max_field() {
        let request = QueryRequest {
            min_price: Some(Decimal::new(20_000, 0)),
            max_price: Some(Decimal::new(10_000, 0)),
            min_mileage: Some(5_000),
            max_mileage: Some(1_000),
            min_date_first_registered: Some(date(2021, 1, 1)),
            max_date_first_registered: Some(date(2020, 1, 1)),
            ..Default::default()
        };

        let errors = request.validate();
        assert!(!errors.is_valid());
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(errors.field("max_price"), ["max_price must be greater than min_price."]);
        assert_eq!(errors.field("max_mileage").len(), 1);
        assert_eq!(errors.field("max_date_first_registered").len(), 1);
    }

    #[test]
    fn co2_and_engine_size_ranges_are_checked() {
        let request = QueryRequest {
            min_co2_level: Some(200),
            max_co2_level: Some(100),
            min_engine_size: Some(2000),
            max_engine_size: Some(1000),
            ..Default::default()
        };

        let errors = request.validate();
        assert_eq!(errors.field("max_co2_level").len(), 1);
        assert_eq!(errors.field("max_engine_size").len(), 1);
    }

    #[test]
    fn equal_bounds_are_valid() {
        let request = QueryRequest {
            min_mileage: Some(1_000),
            max_mileage: Some(1_000),
            ..Default::default()
        };
        assert!(request.validate().is_valid());
    }

    #[test]
    fn single_bound_is_valid() {
        let request = QueryRequest {
            max_price: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(request.validate().is_valid());
    }

    #[test]
    fn zero_page_values_are_rejected() {
        let request = QueryRequest {
            page_number: Some(0),
            page_size: Some(0),
            ..Default::default()
        };

        let errors = request.validate();
        assert_eq!(errors.field("page_number").len(), 1);
        assert_eq!(errors.field("page_size").len(), 1);
    }

    #[test]
    fn invalid_request_builds_no_spec() {
        let request = QueryRequest {
            min_mileage: Some(10),
            max_mileage: Some(5),
            ..Default::default()
        };
        assert!(request.into_spec().is_err());
    }

    #[test]
    fn page_size_is_capped() {
        let request = QueryRequest {
            page_size: Some(1_000),
            ..Default::default()
        };
        let spec = request.into_spec().unwrap();
        assert_eq!(spec.page().page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn fields_map_onto_matching_criteria() {
        let request = QueryRequest {
            page_number: Some(3),
            page_size: Some(25),
            make: Some("Ford".into()),
            trim: Some("Zetec".into()),
            min_co2_level: Some(90),
            min_engine_size: Some(1600),
            max_engine_size: Some(2000),
            ..Default::default()
        };

        let spec = request.into_spec().unwrap();
        assert_eq!(spec.page().page_number(), 3);
        assert_eq!(spec.page().page_size(), 25);
        assert_eq!(spec.make(), Some("Ford"));
        assert_eq!(spec.trim(), Some("Zetec"));
        assert_eq!(spec.model(), None);
        assert_eq!(spec.co2_level().min(), 90);
        assert_eq!(spec.co2_level().max(), i32::MAX);
        assert_eq!(spec.engine_size().min(), 1600);
        assert_eq!(spec.engine_size().max(), 2000);
    }

    #[test]
    fn deserializes_from_partial_json() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"make": "Mazda", "min_date_first_registered": "2015-01-01"}"#)
                .unwrap();

        assert_eq!(request.make.as_deref(), Some("Mazda"));
        assert_eq!(request.min_date_first_registered, Some(date(2015, 1, 1)));
        assert_eq!(request.page_size, None);
    }

    #[test]
    fn display_lists_every_message() {
        let mut errors = ValidationErrors::new();
        errors.add_error("max_price", "too small");
        errors.add_error("max_price", "still too small");

        let text = errors.to_string();
        assert!(text.contains("max_price: too small"));
        assert!(text.contains("max_price: still too small"));
    }
}
