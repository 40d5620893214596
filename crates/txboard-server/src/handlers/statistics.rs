//! Monthly statistics endpoint.

use axum::{Json, extract::State};
use txboard_core::{TransactionSource, TransactionStore, parse_month, parse_year};

use crate::dto::{StatisticsQuery, StatisticsResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Sale statistics for one month.
#[utoipa::path(
    get,
    path = "/statistics",
    params(StatisticsQuery),
    responses(
        (status = 200, description = "Sale total and sale counts", body = StatisticsResponse),
        (status = 400, description = "Missing or invalid month or year", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "statistics"
)]
pub async fn get_statistics<S, U>(
    State(state): State<AppState<S, U>>,
    ApiQuery(params): ApiQuery<StatisticsQuery>,
) -> Result<Json<StatisticsResponse>, ApiError>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let month = parse_month(params.month.as_deref())?;
    let year = parse_year(params.year.as_deref())?;

    let summary = state
        .statistics_service
        .monthly_summary(year, month)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(StatisticsResponse::from(summary)))
}
