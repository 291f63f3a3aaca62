//! Vehicle records and their parsed projections.
//!
//! [`VehicleRecord`] mirrors the catalog file: every text field is a plain
//! string and the registration date is kept as the raw text it was loaded
//! with. [`ResultProjection`] is the shape handed back from query execution,
//! identical except that the date has been parsed into a [`NaiveDate`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{QueryError, Result};

/// Formats accepted for stored registration dates, tried in order.
pub const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// One vehicle as stored in the catalog.
///
/// Missing or `null` text fields load as empty strings and missing numbers
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trim: String,
    #[serde(deserialize_with = "null_as_default")]
    pub colour: String,
    #[serde(deserialize_with = "null_as_default")]
    pub co2_level: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fuel_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_size: i32,
    /// Registration date as stored, normally `DD/MM/YYYY`.
    #[serde(deserialize_with = "null_as_default")]
    pub date_first_reg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mileage: i32,
}

impl VehicleRecord {
    /// Parses the stored registration date.
    ///
    /// Returns `None` if the text matches none of [`DATE_FORMATS`].
    pub fn registration_date(&self) -> Option<NaiveDate> {
        parse_registration_date(&self.date_first_reg)
    }
}

/// Parses registration date text in any of the [`DATE_FORMATS`].
pub fn parse_registration_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A fully parsed, read-only view of a [`VehicleRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultProjection {
    pub price: Decimal,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub colour: String,
    pub co2_level: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub engine_size: i32,
    pub date_first_reg: NaiveDate,
    pub mileage: i32,
}

impl TryFrom<&VehicleRecord> for ResultProjection {
    type Error = QueryError;

    fn try_from(record: &VehicleRecord) -> Result<Self> {
        let date_first_reg = record.registration_date().ok_or_else(|| {
            QueryError::mapping(
                "date_first_reg",
                record.date_first_reg.as_str(),
                "not a valid date string",
            )
        })?;

        Ok(ResultProjection {
            price: record.price,
            make: record.make.clone(),
            model: record.model.clone(),
            trim: record.trim.clone(),
            colour: record.colour.clone(),
            co2_level: record.co2_level,
            transmission: record.transmission.clone(),
            fuel_type: record.fuel_type.clone(),
            engine_size: record.engine_size,
            date_first_reg,
            mileage: record.mileage,
        })
    }
}
