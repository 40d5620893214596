//! Health check endpoint.

use axum::{Json, extract::State};
use txboard_core::{TransactionSource, TransactionStore};

use crate::dto::{HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Health check endpoint.
///
/// Returns the server health status, version and store connectivity.
/// Always answers 200; a failing store check reports `degraded`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server health", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check<S, U>(State(state): State<AppState<S, U>>) -> Json<HealthResponse>
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let database = match state.store.health_check().await {
        Ok(()) => ServiceStatus {
            healthy: true,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            ServiceStatus {
                healthy: false,
                message: Some(e.to_string()),
            }
        }
    };

    Json(HealthResponse {
        status: if database.healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
