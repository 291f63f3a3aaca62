//! Inclusive range bounds over ordered values.
//!
//! A [`RangeFilter`] holds a lower and upper bound and tests values against
//! both ends inclusively. Filters start out covering a whole domain and are
//! narrowed one bound at a time.

use serde::Serialize;

/// Inclusive `min..=max` bound over a totally ordered value type.
///
/// Inverted bounds (`min > max`) are accepted and simply match nothing.
/// Rejecting them is the job of the request boundary, not this type.
///
/// # Example
///
/// ```
/// use vehicles_query::RangeFilter;
///
/// let mileage = RangeFilter::new(0, i32::MAX).with_max(60_000);
///
/// assert!(mileage.is_in_range(60_000));
/// assert!(!mileage.is_in_range(60_001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeFilter<T> {
    min: T,
    max: T,
}

impl<T: Ord + Copy> RangeFilter<T> {
    /// Creates a range covering `min..=max`.
    pub fn new(min: T, max: T) -> Self {
        RangeFilter { min, max }
    }

    /// Replaces the lower bound, keeping the upper bound.
    pub fn with_min(mut self, min: T) -> Self {
        self.min = min;
        self
    }

    /// Replaces the upper bound, keeping the lower bound.
    pub fn with_max(mut self, max: T) -> Self {
        self.max = max;
        self
    }

    /// Returns the lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `true` if `min <= value <= max`.
    pub fn is_in_range(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}
