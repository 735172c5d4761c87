use serde::Deserialize;

/// The daily, all-languages trending page
pub const DEFAULT_TRENDING_URL: &str = "https://github.com/trending?since=daily";

/// Origin prefixed to the relative repository links found on the page
pub const DEFAULT_ORIGIN: &str = "https://github.com";

/// Main configuration structure for Trending Digest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

/// Where the listing comes from and how much of it is kept
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Trending page to fetch
    pub url: String,

    /// Origin prepended to repository hrefs
    pub origin: String,

    /// Whole-request timeout for the page fetch (seconds)
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Rows taken from the page, in page order
    #[serde(rename = "max-entries")]
    pub max_entries: usize,

    /// Fewer extracted entries than this aborts the run
    #[serde(rename = "min-entries")]
    pub min_entries: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TRENDING_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_seconds: 30,
            max_entries: 10,
            min_entries: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the bot
    pub name: String,

    /// Version of the bot
    pub version: String,

    /// URL with information about the bot
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact_url)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "daily-trending-bot".to_string(),
            version: "1.0".to_string(),
            contact_url: "https://github.com".to_string(),
        }
    }
}

/// Retry policy for the page fetch
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Delay before retry n is `backoff_factor * 2^(n-1)` seconds
    #[serde(rename = "backoff-factor")]
    pub backoff_factor: f64,

    /// Upper bound for a single backoff delay (seconds)
    #[serde(rename = "backoff-max-seconds")]
    pub backoff_max_seconds: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 1.0,
            backoff_max_seconds: 120,
        }
    }
}

/// How the report date is computed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Offset from UTC of the civil date printed in the report
    #[serde(rename = "utc-offset-hours")]
    pub utc_offset_hours: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { utc_offset_hours: 8 }
    }
}

/// Email API configuration (credentials come from the environment)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Base URL of the Resend API
    #[serde(rename = "api-url")]
    pub api_url: String,

    /// Subject line before the entry count and date, e.g. `... Top 10 (2026-10-17 UTC+08:00)`
    #[serde(rename = "subject-prefix")]
    pub subject_prefix: String,

    /// Timeout for a single send request (seconds)
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.resend.com".to_string(),
            subject_prefix: "GitHub Trending Daily".to_string(),
            timeout_seconds: 30,
        }
    }
}
