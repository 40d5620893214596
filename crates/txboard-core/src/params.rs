//! Parsing and validation of client-supplied query parameters.
//!
//! Handlers receive raw strings; everything here turns them into typed
//! values or an [`AppError::InvalidParameter`] with a static message.
//! An empty value is treated the same as an absent one.

use crate::error::AppError;
use crate::period::Month;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

const INVALID_PAGINATION: &str = "Invalid page or perPage value";
const INVALID_MONTH: &str = "Invalid month. Must be between 1 and 12.";
const INVALID_YEAR: &str = "Invalid year.";
const MISSING_MONTH: &str = "Month is required";
const MISSING_YEAR: &str = "Year is required";

/// Validated pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Parses `page` and `perPage`, applying defaults for absent values.
    ///
    /// Both must be integers of at least 1.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self, AppError> {
        let page = parse_integer(page, INVALID_PAGINATION)?.unwrap_or(DEFAULT_PAGE);
        let per_page = parse_integer(per_page, INVALID_PAGINATION)?.unwrap_or(DEFAULT_PER_PAGE);
        Self::new(page, per_page)
    }

    pub fn new(page: i64, per_page: i64) -> Result<Self, AppError> {
        if page < 1 || per_page < 1 {
            return Err(AppError::InvalidParameter(INVALID_PAGINATION));
        }
        // Reject pages whose offset would not fit the store's integer type.
        (page - 1)
            .checked_mul(per_page)
            .ok_or(AppError::InvalidParameter(INVALID_PAGINATION))?;
        Ok(Self { page, per_page })
    }

    /// Number of matching records to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// `ceil(total_count / per_page)`.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 0;
        }
        (total_count - 1) / self.per_page + 1
    }
}

/// Parses a required month parameter.
pub fn parse_month(raw: Option<&str>) -> Result<Month, AppError> {
    let value =
        parse_integer(raw, INVALID_MONTH)?.ok_or(AppError::InvalidParameter(MISSING_MONTH))?;
    let month = u32::try_from(value).map_err(|_| AppError::InvalidParameter(INVALID_MONTH))?;
    Month::new(month)
}

/// Parses a required year parameter.
pub fn parse_year(raw: Option<&str>) -> Result<i32, AppError> {
    let value =
        parse_integer(raw, INVALID_YEAR)?.ok_or(AppError::InvalidParameter(MISSING_YEAR))?;
    i32::try_from(value).map_err(|_| AppError::InvalidParameter(INVALID_YEAR))
}

fn parse_integer(raw: Option<&str>, message: &'static str) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::InvalidParameter(message)),
    }
}
