//! HTTP listing source.
//!
//! Fetches a JSON array of listings from a single endpoint. Timeouts and
//! retries are handled here; the unification core never waits on I/O.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::ListingRecord;
use crate::error::Result;
use crate::infrastructure::config::source::SourceConfig;
use crate::port::outbound::source::ListingSource;

/// Pulls listings from a JSON HTTP endpoint.
pub struct HttpSource {
    http: HttpClient,
    url: url::Url,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpSource {
    /// Create a source for `url` with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid absolute URL.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            url: url::Url::parse(url)?,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        })
    }

    /// Build from the `[source]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is missing or invalid.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or(crate::error::ConfigError::MissingField { field: "source.url" })?;

        let mut source = Self::new(url, Duration::from_secs(config.timeout_secs))?;
        source.retry_max_attempts = config.retry_max_attempts;
        source.retry_backoff_ms = config.retry_backoff_ms;
        Ok(source)
    }

    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<ListingRecord>> {
        info!(url = %self.url, "Fetching listings");

        let max_attempts = self.retry_max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = match self.http.get(self.url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let records: Vec<ListingRecord> = response.error_for_status()?.json().await?;
            debug!(count = records.len(), attempt, "Fetched listings");
            return Ok(records);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rejects_relative_url() {
        let result = HttpSource::new("listings.json", Duration::from_secs(1));
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn from_config_requires_url() {
        let config = SourceConfig::default();
        assert!(matches!(
            HttpSource::from_config(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn from_config_applies_retry_policy() {
        let config = SourceConfig {
            url: Some("https://example.com/listings.json".into()),
            retry_max_attempts: 3,
            retry_backoff_ms: 250,
            ..SourceConfig::default()
        };
        let source = HttpSource::from_config(&config).unwrap();
        assert_eq!(source.url().as_str(), "https://example.com/listings.json");
        assert_eq!(source.retry_max_attempts, 3);
        assert_eq!(source.retry_backoff_ms, 250);
    }
}
