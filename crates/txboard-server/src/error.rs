use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use txboard_core::error::AppError;

/// API error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Converts `err` like `From` does, but keeps the underlying error
    /// text in the response body of server-side failures.
    pub fn with_details(err: AppError) -> Self {
        let details = err.to_string();
        match ApiError::from(err) {
            ApiError::Internal { message, .. } => ApiError::Internal {
                message,
                details: Some(details),
            },
            other => other,
        }
    }

    fn internal(message: &str) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            details: None,
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        if !err.is_client_error() {
            tracing::error!(error = %err, "Request failed");
        }

        match err {
            AppError::InvalidParameter(msg) => ApiError::BadRequest(msg.to_string()),
            AppError::UpstreamPayload(_) => {
                ApiError::BadRequest("Upstream data must be a JSON array".to_string())
            }
            AppError::UpstreamFetch(_) => ApiError::internal("Error fetching upstream data"),
            AppError::DatabaseError(_) | AppError::StoreError(_) => {
                ApiError::internal("Database error")
            }
            AppError::SerializationError(_) | AppError::ConfigError(_) => {
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        ApiError::BadRequest("Invalid query string".to_string())
    }
}
