//! Trending Digest main entry point
//!
//! This is the command-line interface for the daily GitHub Trending email.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use trending_digest::config::load_config_with_hash;
use trending_digest::pipeline::{run_digest, Delivery, Outcome};
use trending_digest::MailCredentials;
use tracing_subscriber::EnvFilter;

/// Trending Digest: GitHub Trending, daily, in your inbox
///
/// Fetches the daily trending page, extracts the top repositories and mails
/// them as an HTML table through Resend. Credentials are read from
/// RESEND_API_KEY, SENDER_EMAIL and RECIPIENT_EMAIL.
#[derive(Parser, Debug)]
#[command(name = "trending-digest")]
#[command(version)]
#[command(about = "Daily GitHub Trending email", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Only print HTML, do not send email
    #[arg(long)]
    no_email: bool,

    /// Override the minimum number of entries a run must extract
    #[arg(long, value_name = "N")]
    min_entries: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) =
        load_config_with_hash(cli.config.as_deref()).context("Failed to load configuration")?;
    match (&cli.config, config_hash) {
        (Some(path), Some(hash)) => {
            tracing::info!("Configuration loaded from {} (hash: {})", path.display(), hash)
        }
        _ => tracing::info!("Using default configuration"),
    }

    if let Some(min_entries) = cli.min_entries {
        if min_entries > config.source.max_entries {
            anyhow::bail!(
                "--min-entries {} exceeds max-entries {}",
                min_entries,
                config.source.max_entries
            );
        }
        config.source.min_entries = min_entries;
    }

    let delivery = if cli.no_email {
        Delivery::Print
    } else {
        // Fail before touching the network when mail settings are incomplete
        let credentials = MailCredentials::from_env();
        credentials
            .validate()
            .context("Email delivery is not configured")?;
        Delivery::Send(credentials)
    };

    match run_digest(&config, delivery).await {
        Ok(Outcome::Printed(digest)) => {
            println!("{}", digest.html);
            Ok(())
        }
        Ok(Outcome::Sent { receipt, .. }) => {
            println!("{}", receipt.raw);
            Ok(())
        }
        // anyhow prints the error and its causes on stderr
        Err(e) => Err(anyhow::Error::new(e).context("Digest run failed")),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the HTML or the API response.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("trending_digest=info,warn"),
            1 => EnvFilter::new("trending_digest=debug,info"),
            2 => EnvFilter::new("trending_digest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
