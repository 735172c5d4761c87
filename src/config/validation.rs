use crate::config::types::{
    Config, EmailConfig, ReportConfig, RetryConfig, SourceConfig, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_retry_config(&config.retry)?;
    validate_report_config(&config.report)?;
    validate_email_config(&config.email)?;
    Ok(())
}

/// Validates the trending source settings
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid source url '{}': {}", config.url, e)))?;

    if url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Source url '{}' must use HTTPS scheme",
            config.url
        )));
    }

    Url::parse(&config.origin).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid origin '{}': {}", config.origin, e))
    })?;

    if config.timeout_seconds < 1 {
        return Err(ConfigError::Validation(
            "source timeout-seconds must be >= 1".to_string(),
        ));
    }

    if config.max_entries < 1 {
        return Err(ConfigError::Validation(
            "max-entries must be >= 1".to_string(),
        ));
    }

    if config.min_entries > config.max_entries {
        return Err(ConfigError::Validation(format!(
            "min-entries ({}) cannot exceed max-entries ({})",
            config.min_entries, config.max_entries
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

fn validate_retry_config(config: &RetryConfig) -> Result<(), ConfigError> {
    if !config.backoff_factor.is_finite() || config.backoff_factor < 0.0 {
        return Err(ConfigError::Validation(format!(
            "backoff-factor must be a non-negative number, got {}",
            config.backoff_factor
        )));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be <= 10, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if !(-12..=14).contains(&config.utc_offset_hours) {
        return Err(ConfigError::Validation(format!(
            "utc-offset-hours must be between -12 and 14, got {}",
            config.utc_offset_hours
        )));
    }

    Ok(())
}

fn validate_email_config(config: &EmailConfig) -> Result<(), ConfigError> {
    Url::parse(&config.api_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid email api-url '{}': {}", config.api_url, e))
    })?;

    if config.subject_prefix.trim().is_empty() {
        return Err(ConfigError::Validation(
            "subject-prefix cannot be empty".to_string(),
        ));
    }

    if config.timeout_seconds < 1 {
        return Err(ConfigError::Validation(
            "email timeout-seconds must be >= 1".to_string(),
        ));
    }

    Ok(())
}
