//! Dataset fetching with timeouts and retry.
//!
//! One-shot GET of the dataset JSON. Transient failures are retried with
//! exponential backoff; the final failure is surfaced to the caller so a
//! failed load exits non-zero instead of silently rendering nothing.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use heatmap_common::Dataset;

/// Configuration for the dataset fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial retry delay (doubles each retry)
    pub initial_retry_delay: Duration,
    /// Maximum retry delay
    pub max_retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_retries: 3,
            initial_retry_delay: Duration::from_secs(2),
            max_retry_delay: Duration::from_secs(60),
        }
    }
}

/// Fetches and parses the dataset document.
pub struct DatasetFetcher {
    client: Client,
    config: FetchConfig,
}

impl DatasetFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Fetch the dataset, retrying transient failures with backoff.
    pub async fn fetch(&self, url: &str) -> Result<Dataset> {
        let mut delay = self.config.initial_retry_delay;
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                warn!(attempt, delay_secs = delay.as_secs(), "retrying dataset fetch");
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(self.config.max_retry_delay);
            }

            match self.try_fetch(url).await {
                Ok(dataset) => return Ok(dataset),
                Err(error) => {
                    warn!(error = %error, "dataset fetch failed");
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("dataset fetch failed")))
    }

    async fn try_fetch(&self, url: &str) -> Result<Dataset> {
        debug!(url, "requesting dataset");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("server returned an error status")?;

        let body = response
            .text()
            .await
            .context("failed to read response body")?;

        Ok(Dataset::from_json(&body)?)
    }
}
