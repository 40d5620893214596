//! Request DTOs for API endpoints.
//!
//! Parameters are taken as raw strings so that missing, empty and
//! malformed values all reach the core parsers, which own the error
//! messages.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the transaction listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionsQuery {
    /// Page number, starting at 1 (default: 1)
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,

    /// Page size (default: 10)
    #[serde(rename = "perPage")]
    #[param(value_type = Option<i64>, example = 10)]
    pub per_page: Option<String>,

    /// Matches title or description (case-insensitive), or the exact price
    #[param(example = "jacket")]
    pub search: Option<String>,
}

/// Query parameters for the monthly statistics.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatisticsQuery {
    /// Month, 1-12
    #[param(value_type = i32, example = 3)]
    pub month: Option<String>,

    /// Calendar year
    #[param(value_type = i32, example = 2024)]
    pub year: Option<String>,
}

/// Query parameters for the current-year monthly charts.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    /// Month of the current year, 1-12
    #[param(value_type = i32, example = 3)]
    pub month: Option<String>,
}
