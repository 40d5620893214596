//! Configuration types shared by the txboard crates.

use std::time::Duration;

use crate::error::AppError;

/// Database connection pool configuration.
pub struct DbConfig {
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self { max_connections: 5 }
    }
}

impl DbConfig {
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// HTTP client configuration for the upstream fetch.
///
/// There are deliberately no retry settings: a failed fetch is reported
/// once and the caller re-runs the ingest.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("txboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Checks that a configured upstream URL uses an HTTP scheme.
pub fn validate_source_url(url: &str) -> Result<(), AppError> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::ConfigError(format!(
            "Source URL must start with http:// or https://, got '{}'",
            url
        )))
    }
}
