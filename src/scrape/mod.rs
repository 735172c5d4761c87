//! Scraping module for the trending page
//!
//! This module contains:
//! - HTTP fetching with retry and backoff
//! - The `Extractor` seam and its CSS selector implementation
//! - The `TrendingEntry` record produced by extraction

mod entry;
mod extractor;
mod fetcher;

pub use entry::TrendingEntry;
pub use extractor::{normalize_name, parse_star_count, CssExtractor, Extractor};
pub use fetcher::{backoff_delay, build_http_client, fetch_page, is_retryable_status};
