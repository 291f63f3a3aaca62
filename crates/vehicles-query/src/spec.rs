//! Query specification builder.
//!
//! The [`QuerySpecification`] struct accumulates filter and pagination intent
//! through a fluent builder API. It performs no validation and no I/O; it is
//! consumed by [`QueryExecutor`](crate::QueryExecutor).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::page::PageSpec;
use crate::range::RangeFilter;

/// Page size used when a specification does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Largest page size the request boundary will hand to a specification.
pub const MAX_PAGE_SIZE: usize = 100;

/// Filter and pagination criteria for one query.
///
/// Every range starts out covering its whole domain, so an unset range
/// never excludes anything. Text criteria are `None` until set, and `None`
/// means unconstrained.
///
/// # Example
///
/// ```
/// use vehicles_query::QuerySpecification;
///
/// let spec = QuerySpecification::new()
///     .with_make(Some("Mazda"))
///     .with_colour(Some("red"))
///     .with_mileage(None, Some(60_000))
///     .with_page_size(Some(20));
///
/// assert_eq!(spec.make(), Some("Mazda"));
/// assert_eq!(spec.page().page_size(), 20);
/// assert!(spec.mileage().is_in_range(60_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySpecification {
    page: PageSpec,
    price: RangeFilter<Decimal>,
    make: Option<String>,
    model: Option<String>,
    trim: Option<String>,
    colour: Option<String>,
    co2_level: RangeFilter<i32>,
    transmission: Option<String>,
    fuel_type: Option<String>,
    engine_size: RangeFilter<i32>,
    date_first_registered: RangeFilter<NaiveDate>,
    mileage: RangeFilter<i32>,
}

impl Default for QuerySpecification {
    fn default() -> Self {
        QuerySpecification {
            page: PageSpec::new(1, DEFAULT_PAGE_SIZE),
            price: RangeFilter::new(Decimal::ZERO, Decimal::MAX),
            make: None,
            model: None,
            trim: None,
            colour: None,
            co2_level: RangeFilter::new(0, i32::MAX),
            transmission: None,
            fuel_type: None,
            engine_size: RangeFilter::new(0, i32::MAX),
            date_first_registered: RangeFilter::new(NaiveDate::MIN, NaiveDate::MAX),
            mileage: RangeFilter::new(0, i32::MAX),
        }
    }
}

/// Narrows whichever bounds are present.
fn narrow<T: Ord + Copy>(range: RangeFilter<T>, min: Option<T>, max: Option<T>) -> RangeFilter<T> {
    let range = match min {
        Some(min) => range.with_min(min),
        None => range,
    };
    match max {
        Some(max) => range.with_max(max),
        None => range,
    }
}

impl QuerySpecification {
    /// Creates a specification that matches everything and returns the
    /// first page of [`DEFAULT_PAGE_SIZE`] results.
    pub fn new() -> Self {
        QuerySpecification::default()
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Sets the 1-based page number, or restores page 1 when `None`.
    pub fn with_page_number(mut self, page_number: Option<usize>) -> Self {
        self.page = self.page.with_page_number(page_number);
        self
    }

    /// Sets the page size, or restores [`DEFAULT_PAGE_SIZE`] when `None`.
    ///
    /// Any size is accepted here; [`MAX_PAGE_SIZE`] is enforced by the
    /// request boundary.
    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page = self.page.with_page_size(page_size);
        self
    }

    // ========================================================================
    // Ranges
    // ========================================================================

    /// Narrows the price range with whichever bounds are present.
    pub fn with_price(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.price = narrow(self.price, min, max);
        self
    }

    /// Narrows the CO2 level range with whichever bounds are present.
    pub fn with_co2_level(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.co2_level = narrow(self.co2_level, min, max);
        self
    }

    /// Narrows the engine size range with whichever bounds are present.
    pub fn with_engine_size(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.engine_size = narrow(self.engine_size, min, max);
        self
    }

    /// Narrows the first-registration date range with whichever bounds are present.
    pub fn with_date_first_registered(
        mut self,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    ) -> Self {
        self.date_first_registered = narrow(self.date_first_registered, min, max);
        self
    }

    /// Narrows the mileage range with whichever bounds are present.
    pub fn with_mileage(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.mileage = narrow(self.mileage, min, max);
        self
    }

    // ========================================================================
    // Exact-match text
    // ========================================================================

    /// Requires the make to match, ignoring case. `None` clears the criterion.
    pub fn with_make(mut self, make: Option<&str>) -> Self {
        self.make = make.map(str::to_owned);
        self
    }

    /// Requires the model to match, ignoring case. `None` clears the criterion.
    pub fn with_model(mut self, model: Option<&str>) -> Self {
        self.model = model.map(str::to_owned);
        self
    }

    /// Requires the trim to match, ignoring case. `None` clears the criterion.
    pub fn with_trim(mut self, trim: Option<&str>) -> Self {
        self.trim = trim.map(str::to_owned);
        self
    }

    /// Requires the colour to match, ignoring case. `None` clears the criterion.
    pub fn with_colour(mut self, colour: Option<&str>) -> Self {
        self.colour = colour.map(str::to_owned);
        self
    }

    /// Requires the transmission to match, ignoring case. `None` clears the criterion.
    pub fn with_transmission(mut self, transmission: Option<&str>) -> Self {
        self.transmission = transmission.map(str::to_owned);
        self
    }

    /// Requires the fuel type to match, ignoring case. `None` clears the criterion.
    pub fn with_fuel_type(mut self, fuel_type: Option<&str>) -> Self {
        self.fuel_type = fuel_type.map(str::to_owned);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the pagination settings.
    pub fn page(&self) -> &PageSpec {
        &self.page
    }

    /// Returns the price range.
    pub fn price(&self) -> &RangeFilter<Decimal> {
        &self.price
    }

    /// Returns the CO2 level range.
    pub fn co2_level(&self) -> &RangeFilter<i32> {
        &self.co2_level
    }

    /// Returns the engine size range.
    pub fn engine_size(&self) -> &RangeFilter<i32> {
        &self.engine_size
    }

    /// Returns the first-registration date range.
    pub fn date_first_registered(&self) -> &RangeFilter<NaiveDate> {
        &self.date_first_registered
    }

    /// Returns the mileage range.
    pub fn mileage(&self) -> &RangeFilter<i32> {
        &self.mileage
    }

    /// Returns the required make, if set.
    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    /// Returns the required model, if set.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the required trim, if set.
    pub fn trim(&self) -> Option<&str> {
        self.trim.as_deref()
    }

    /// Returns the required colour, if set.
    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    /// Returns the required transmission, if set.
    pub fn transmission(&self) -> Option<&str> {
        self.transmission.as_deref()
    }

    /// Returns the required fuel type, if set.
    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }
}
