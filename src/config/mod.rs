//! Configuration module for Trending Digest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so the job runs with no
//! file at all.
//!
//! # Example
//!
//! ```no_run
//! use trending_digest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Some(Path::new("digest.toml"))).unwrap();
//! println!("Fetching: {}", config.source.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EmailConfig, ReportConfig, RetryConfig, SourceConfig, UserAgentConfig,
    DEFAULT_ORIGIN, DEFAULT_TRENDING_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
