//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 50
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 500
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(50);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=500).contains(&page_size) {
            return Err("Page size must be between 1 and 500".to_string());
        }

        // Widen before multiplying; u32 page numbers can overflow u32 math.
        let offset = (i64::from(page) - 1) * i64::from(page_size);
        let limit = i64::from(page_size);

        Ok((offset, limit))
    }
}
