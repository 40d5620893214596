//! HTTP source for the upstream transaction dataset.
//!
//! The upstream serves a single JSON document; there is no pagination and
//! no authentication. A failed fetch is reported once, without retries.

use reqwest::{Client, Url};
use serde_json::Value;
use txboard_core::error::AppError;
use txboard_core::traits::TransactionSource;
use txboard_core::{HttpConfig, validate_source_url};

/// Fetches the upstream document over HTTP(S).
///
/// # Examples
///
/// ```no_run
/// use txboard_client::HttpTransactionSource;
/// use txboard_core::{HttpConfig, TransactionSource};
///
/// # async fn example() -> Result<(), txboard_core::AppError> {
/// let source = HttpTransactionSource::new(
///     "https://example.com/product_transaction.json",
///     HttpConfig::default(),
/// )?;
/// let document = source.fetch().await?;
/// println!("{} records upstream", document.as_array().map_or(0, Vec::len));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpTransactionSource {
    client: Client,
    url: Url,
}

impl HttpTransactionSource {
    /// Creates a source for `url`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if the URL is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(url: &str, config: HttpConfig) -> Result<Self, AppError> {
        validate_source_url(url)?;
        let url = Url::parse(url.trim())
            .map_err(|e| AppError::ConfigError(format!("Invalid source URL '{}': {}", url, e)))?;

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl TransactionSource for HttpTransactionSource {
    async fn fetch(&self) -> Result<Value, AppError> {
        tracing::debug!(url = %self.url, "Fetching upstream dataset");

        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::UpstreamFetch(format!("Request to {} timed out", self.url))
                } else if e.is_connect() {
                    AppError::UpstreamFetch(format!("Connection failed: {}", e))
                } else {
                    AppError::UpstreamFetch(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::UpstreamFetch(format!(
                "HTTP {} from {}",
                status.as_u16(),
                self.url
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::UpstreamFetch(format!("Response is not valid JSON: {}", e)))
    }
}
