use thiserror::Error;

/// Application-wide error types.
///
/// Every failure the services can produce is one of these variants. The
/// server layer maps them onto HTTP status codes; the core never decides
/// how an error is presented.
///
/// # Error Conversion
///
/// Errors from the storage and serialization libraries convert automatically:
/// - `sqlx::Error` → `AppError::DatabaseError`
/// - `serde_json::Error` → `AppError::SerializationError`
///
/// # Examples
///
/// ```
/// use txboard_core::error::AppError;
///
/// fn parse() -> Result<(), AppError> {
///     Err(AppError::InvalidParameter("Invalid month. Must be between 1 and 12."))
/// }
///
/// assert!(parse().unwrap_err().is_client_error());
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// Wraps connection failures, query errors and transaction aborts
    /// from SQLx.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// A store operation failed for a reason that is not an SQLx error.
    ///
    /// Used by non-SQL store implementations.
    #[error("Store error: {0}")]
    StoreError(String),

    /// The upstream dataset could not be fetched.
    ///
    /// Covers connection failures, non-success HTTP status codes and
    /// bodies that are not valid JSON.
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// The upstream dataset was fetched but has the wrong shape.
    ///
    /// The source must serve a JSON array of transaction objects.
    #[error("Invalid upstream payload: {0}")]
    UpstreamPayload(String),

    /// A client supplied query parameter failed to parse or is out of range.
    ///
    /// The message is static and safe to return to the caller verbatim.
    #[error("{0}")]
    InvalidParameter(&'static str),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the service or its dependencies.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidParameter(_) | AppError::UpstreamPayload(_)
        )
    }

    /// Returns true when the error originates in the record store.
    pub fn is_store_error(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::StoreError(_))
    }
}
