//! Page number and page size with sticky defaults.

use serde::Serialize;

/// A 1-based page request.
///
/// Both fields remember the value they were constructed with. Updating a
/// field with `None` restores that construction-time default, not the value
/// the field held just before the update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSpec {
    page_number: usize,
    page_size: usize,
    #[serde(skip)]
    default_page_number: usize,
    #[serde(skip)]
    default_page_size: usize,
}

impl PageSpec {
    /// Creates a page spec whose defaults are the given values.
    pub fn new(page_number: usize, page_size: usize) -> Self {
        PageSpec {
            page_number,
            page_size,
            default_page_number: page_number,
            default_page_size: page_size,
        }
    }

    /// Sets the page number, or restores the default when `None`.
    pub fn with_page_number(mut self, page_number: Option<usize>) -> Self {
        self.page_number = page_number.unwrap_or(self.default_page_number);
        self
    }

    /// Sets the page size, or restores the default when `None`.
    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page_size = page_size.unwrap_or(self.default_page_size);
        self
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of matching items to skip before this page starts.
    ///
    /// Page 0 is treated as page 1. The result saturates instead of
    /// overflowing; callers clamp it to the collection length.
    pub fn offset(&self) -> usize {
        self.page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }
}
