//! Store initialization endpoint.

use axum::{Json, extract::State};
use txboard_core::{TransactionSource, TransactionStore};

use crate::dto::InitializeResponse;
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Re-seed the store from the upstream dataset.
///
/// Fetches the upstream JSON array and replaces every stored record with
/// the normalized result. Records without a valid date are dropped. The
/// previous contents stay in place if anything fails.
#[utoipa::path(
    get,
    path = "/initialize",
    responses(
        (status = 200, description = "Store re-seeded", body = InitializeResponse),
        (status = 400, description = "Upstream payload is not a JSON array", body = ErrorResponse),
        (status = 500, description = "Upstream fetch or store failure", body = ErrorResponse),
    ),
    tag = "ingest"
)]
pub async fn initialize<S, U>(
    State(state): State<AppState<S, U>>,
) -> Result<Json<InitializeResponse>, ApiError>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let report = state
        .ingest_service
        .initialize()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(InitializeResponse::from(report)))
}
