//! Calendar month windows used by the aggregate services.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::AppError;

const INVALID_MONTH: &str = "Invalid month. Must be between 1 and 12.";
const INVALID_YEAR: &str = "Invalid year.";

/// A calendar month, guaranteed to be in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> Result<Self, AppError> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(AppError::InvalidParameter(INVALID_MONTH))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

/// Half-open UTC interval `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Builds the window for `month` of `year`.
    ///
    /// `end` is the first instant of the following month, so December
    /// rolls into January of the next year. Years outside chrono's
    /// representable range are rejected as invalid parameters.
    pub fn new(year: i32, month: Month) -> Result<Self, AppError> {
        let start = first_instant(year, month.number())?;
        let end = if month.number() == 12 {
            let next_year = year
                .checked_add(1)
                .ok_or(AppError::InvalidParameter(INVALID_YEAR))?;
            first_instant(next_year, 1)?
        } else {
            first_instant(year, month.number() + 1)?
        };
        Ok(Self { start, end })
    }

    /// Window for `month` of the current UTC year.
    pub fn current_year(month: Month) -> Result<Self, AppError> {
        Self::new(Utc::now().year(), month)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

fn first_instant(year: i32, month: u32) -> Result<DateTime<Utc>, AppError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(AppError::InvalidParameter(INVALID_YEAR))
}
