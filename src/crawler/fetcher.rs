//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent
//! - GET requests to fetch page content
//! - Uniform retry with a fixed delay before every attempt
//! - Error classification

use crate::config::ScrapingConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a single fetch attempt
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The scraping configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ScrapingConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs one GET request and classifies the outcome
///
/// # Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx with readable body | Success |
/// | Any other HTTP status | HttpError |
/// | Timeout, connection or body error | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Page fetcher with bounded, uniform retries
///
/// Every attempt, the first included, is preceded by the same fixed delay.
/// There is no backoff and no jitter: the failures this guards against are
/// the site's rate limits, which a steady pace respects.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_attempts: u32,
    delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the scraping configuration
    pub fn new(config: &ScrapingConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(
            client,
            config.max_retries,
            config.request_delay(),
        ))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, max_attempts: u32, delay: Duration) -> Self {
        Self {
            client,
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetches a page body, retrying on any failure
    ///
    /// # Returns
    ///
    /// * `Some(String)` - Body of the first successful attempt
    /// * `None` - Every attempt failed; the failure is logged, never raised
    pub async fn fetch(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.max_attempts {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match fetch_url(&self.client, url).await {
                FetchResult::Success {
                    final_url,
                    status_code,
                    body,
                } => {
                    tracing::debug!(
                        "Attempt {} succeeded for {} (HTTP {}, final URL {})",
                        attempt,
                        url,
                        status_code,
                        final_url
                    );
                    return Some(body);
                }
                FetchResult::HttpError { status_code } => {
                    tracing::warn!(
                        "Attempt {} failed for {}: HTTP {}",
                        attempt,
                        url,
                        status_code
                    );
                }
                FetchResult::NetworkError { error } => {
                    tracing::warn!("Attempt {} failed for {}: {}", attempt, url, error);
                }
            }
        }

        tracing::error!("All {} attempts failed for {}", self.max_attempts, url);
        None
    }
}
