//! HTTP fetcher for the trending page
//!
//! This module handles the single page request of a run:
//! - Building the HTTP client with the bot's user agent and accept headers
//! - GET with a bounded timeout
//! - Retry with capped exponential backoff for transient failures
//! - Error classification into `FetchError`

use crate::config::{RetryConfig, UserAgentConfig};
use crate::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.9";

/// Builds the HTTP client used for the page fetch
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Whole-request timeout
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use trending_digest::config::UserAgentConfig;
/// use trending_digest::scrape::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

    Client::builder()
        .user_agent(config.header_value())
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10).min(timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body, retrying transient failures
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 2xx | Return body |
/// | HTTP 429, 500, 502, 503, 504 | Retry with backoff |
/// | Other HTTP status | Fail immediately |
/// | Connect error, timeout, reset | Retry with backoff |
/// | Anything else | Fail immediately |
///
/// At most `retry.max_retries` retries follow the first attempt. The sleep
/// before retry n is given by [`backoff_delay`].
pub async fn fetch_page(
    client: &Client,
    url: &str,
    retry: &RetryConfig,
) -> Result<String, FetchError> {
    let max_attempts = retry.max_retries.saturating_add(1);
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        tracing::debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();

                if status.is_success() {
                    return response
                        .text()
                        .await
                        .map_err(|source| FetchError::Transport {
                            url: url.to_string(),
                            attempts: attempt,
                            source,
                        });
                }

                if !is_retryable_status(status) || attempt >= max_attempts {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                        attempts: attempt,
                    });
                }

                tracing::warn!("GET {} returned HTTP {}, will retry", url, status.as_u16());
            }
            Err(e) => {
                if !is_retryable_error(&e) || attempt >= max_attempts {
                    return Err(FetchError::Transport {
                        url: url.to_string(),
                        attempts: attempt,
                        source: e,
                    });
                }

                tracing::warn!("GET {} failed: {}, will retry", url, e);
            }
        }

        let delay = backoff_delay(retry, attempt);
        if !delay.is_zero() {
            tracing::info!("Backing off for {:.1}s", delay.as_secs_f64());
            tokio::time::sleep(delay).await;
        }
    }
}

/// Statuses worth another GET: rate limiting and transient server errors
pub fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

fn is_retryable_error(error: &reqwest::Error) -> bool {
    if error.is_builder() || error.is_redirect() {
        return false;
    }
    error.is_connect() || error.is_timeout() || error.is_request()
}

/// Delay before retry number `retry_number` (1-based)
///
/// `backoff_factor * 2^(retry_number - 1)` seconds, capped at
/// `backoff_max_seconds`.
pub fn backoff_delay(retry: &RetryConfig, retry_number: u32) -> Duration {
    let exponent = retry_number.saturating_sub(1).min(30) as i32;
    let secs = (retry.backoff_factor * 2f64.powi(exponent)).min(retry.backoff_max_seconds as f64);

    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(secs)
}
