//! Price histogram endpoint.

use axum::{Json, extract::State};
use txboard_core::{TransactionSource, TransactionStore, parse_month};

use crate::dto::{MonthQuery, PriceRangeDto};
use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Price histogram for a month of the current year.
///
/// Always returns the ten bands in ascending order, including empty ones.
#[utoipa::path(
    get,
    path = "/price-range",
    params(MonthQuery),
    responses(
        (status = 200, description = "Record count per price band", body = [PriceRangeDto]),
        (status = 400, description = "Missing or invalid month", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "statistics"
)]
pub async fn get_price_range<S, U>(
    State(state): State<AppState<S, U>>,
    ApiQuery(params): ApiQuery<MonthQuery>,
) -> Result<Json<Vec<PriceRangeDto>>, ApiError>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let month = parse_month(params.month.as_deref())?;

    let histogram = state
        .histogram_service
        .price_histogram(month)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(histogram.into_iter().map(PriceRangeDto::from).collect()))
}
