//! Trending Digest: a daily GitHub Trending email
//!
//! This crate fetches the GitHub trending page, extracts the top repositories,
//! renders them as an HTML email and hands the result to a transactional
//! email API.

pub mod config;
pub mod mailer;
pub mod output;
pub mod pipeline;
pub mod scrape;

use thiserror::Error;

/// Main error type for a digest run
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Expected at least {expected} trending entries, extracted {found}; the page layout may have changed")]
    ShortResult { expected: usize, found: usize },

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing required setting: {0}")]
    Missing(String),

    #[error("No recipients left after parsing {0}")]
    NoRecipients(String),
}

/// Errors raised while fetching the trending page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} returned HTTP {status} after {attempts} attempt(s)")]
    Status {
        url: String,
        status: u16,
        attempts: u32,
    },

    #[error("GET {url} failed after {attempts} attempt(s): {source}")]
    Transport {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },
}

/// Errors raised by the email collaborator
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Email API request failed: {source}")]
    Request { source: reqwest::Error },

    #[error("Email API rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result type alias for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use mailer::{MailCredentials, Recipients};
pub use scrape::{Extractor, TrendingEntry};
