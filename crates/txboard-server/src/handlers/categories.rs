//! Category breakdown endpoint.

use axum::{Json, extract::State};
use txboard_core::{TransactionSource, TransactionStore, parse_month};

use crate::dto::{CategoryStatDto, MonthQuery};
use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Record counts per category for a month of the current year.
#[utoipa::path(
    get,
    path = "/category-stats",
    params(MonthQuery),
    responses(
        (status = 200, description = "Count per category", body = [CategoryStatDto]),
        (status = 400, description = "Missing or invalid month", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "statistics"
)]
pub async fn get_category_stats<S, U>(
    State(state): State<AppState<S, U>>,
    ApiQuery(params): ApiQuery<MonthQuery>,
) -> Result<Json<Vec<CategoryStatDto>>, ApiError>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let month = parse_month(params.month.as_deref())?;

    let categories = state
        .category_service
        .category_breakdown(month)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(categories.into_iter().map(CategoryStatDto::from).collect()))
}
