//! Digest pipeline: fetch, extract, render, dispatch
//!
//! Every step runs once and in order. A failure at any step ends the run;
//! nothing is carried over to the next invocation.

use crate::config::Config;
use crate::mailer::{dispatch, MailCredentials, ResendClient, SendReceipt};
use crate::output::{render_email, ReportHeader};
use crate::scrape::{build_http_client, fetch_page, CssExtractor, Extractor, TrendingEntry};
use crate::{ConfigError, DigestError};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use reqwest::Client;
use std::time::Duration;

/// What to do with the rendered digest
#[derive(Debug)]
pub enum Delivery {
    /// Print the HTML only
    Print,
    /// Send it with these credentials
    Send(MailCredentials),
}

/// A rendered digest
#[derive(Debug, Clone)]
pub struct Digest {
    pub date: NaiveDate,
    pub subject: String,
    pub html: String,
    pub entries: Vec<TrendingEntry>,
}

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    Printed(Digest),
    Sent { digest: Digest, receipt: SendReceipt },
}

/// Runs the whole job once
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and extractor
/// 2. Fetch and extract the trending page
/// 3. Abort if fewer than `min-entries` entries were found
/// 4. Render the email
/// 5. Print it, or send it through Resend
pub async fn run_digest(config: &Config, delivery: Delivery) -> Result<Outcome, DigestError> {
    let client = build_http_client(
        &config.user_agent,
        Duration::from_secs(config.source.timeout_seconds),
    )?;
    let extractor = CssExtractor::new(&config.source.origin, config.source.max_entries)?;

    let digest = build_digest(config, &client, &extractor, Utc::now()).await?;

    match delivery {
        Delivery::Print => Ok(Outcome::Printed(digest)),
        Delivery::Send(credentials) => {
            let mailer = ResendClient::new(
                &credentials.api_key,
                &config.email.api_url,
                Duration::from_secs(config.email.timeout_seconds),
            )?;
            let receipt = dispatch(&mailer, &credentials, &digest.subject, &digest.html).await?;
            tracing::info!(
                "Digest sent (id: {})",
                receipt.id.as_deref().unwrap_or("unknown")
            );
            Ok(Outcome::Sent { digest, receipt })
        }
    }
}

/// Fetches, extracts and renders the digest without sending it
///
/// # Arguments
///
/// * `config` - Job configuration
/// * `client` - HTTP client for the page fetch
/// * `extractor` - Page extraction strategy
/// * `now` - Current instant; the report date is its civil date at
///   `report.utc-offset-hours`
pub async fn build_digest<E>(
    config: &Config,
    client: &Client,
    extractor: &E,
    now: DateTime<Utc>,
) -> Result<Digest, DigestError>
where
    E: Extractor + ?Sized,
{
    let (date, zone) = reference_date(now, config.report.utc_offset_hours)?;

    tracing::info!("Fetching {}", config.source.url);
    let page = fetch_page(client, &config.source.url, &config.retry).await?;
    tracing::info!("Fetched {} bytes", page.len());

    let entries = extractor.extract(&page);
    tracing::info!("Extracted {} trending entries", entries.len());

    if entries.len() < config.source.min_entries {
        return Err(DigestError::ShortResult {
            expected: config.source.min_entries,
            found: entries.len(),
        });
    }

    let header = ReportHeader {
        date: date.format("%Y-%m-%d").to_string(),
        zone,
        source_url: config.source.url.clone(),
    };
    let html = render_email(&entries, &header);
    let subject = subject_line(&config.email.subject_prefix, config.source.max_entries, &header);

    Ok(Digest {
        date,
        subject,
        html,
        entries,
    })
}

/// `{prefix} Top {count} ({date} {zone})`
pub fn subject_line(prefix: &str, count: usize, header: &ReportHeader) -> String {
    format!("{} Top {} ({} {})", prefix, count, header.date, header.zone)
}

/// Civil date of `now` at a fixed UTC offset, with a zone label like `UTC+08:00`
pub fn reference_date(
    now: DateTime<Utc>,
    utc_offset_hours: i32,
) -> Result<(NaiveDate, String), ConfigError> {
    let offset = utc_offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            ConfigError::Validation(format!("Invalid UTC offset: {} hours", utc_offset_hours))
        })?;

    let local = now.with_timezone(&offset);
    Ok((local.date_naive(), format!("UTC{}", offset)))
}
