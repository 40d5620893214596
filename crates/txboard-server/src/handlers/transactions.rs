//! Transaction listing endpoint.

use axum::{Json, extract::State};
use txboard_core::{Pagination, TransactionSource, TransactionStore};

use crate::dto::{TransactionsQuery, TransactionsResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiQuery;
use crate::state::AppState;

/// List transactions with pagination and search.
///
/// Matches `search` against title and description (case-insensitive) and,
/// when it is a number, against the exact price. Results come in insertion
/// order.
#[utoipa::path(
    get,
    path = "/transactions",
    params(TransactionsQuery),
    responses(
        (status = 200, description = "One page of transactions", body = TransactionsResponse),
        (status = 400, description = "Invalid page or perPage", body = ErrorResponse),
        (status = 500, description = "Store failure, with error details", body = ErrorResponse),
    ),
    tag = "transactions"
)]
pub async fn list_transactions<S, U>(
    State(state): State<AppState<S, U>>,
    ApiQuery(params): ApiQuery<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, ApiError>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let pagination = Pagination::parse(params.page.as_deref(), params.per_page.as_deref())?;
    let search = params.search.unwrap_or_default();

    let results = state
        .search_service
        .search(&search, pagination)
        .await
        .map_err(ApiError::with_details)?;

    Ok(Json(TransactionsResponse::from(results)))
}
