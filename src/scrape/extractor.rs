//! Trending page extraction
//!
//! The page layout belongs to GitHub and changes without notice, so the
//! pipeline only depends on the [`Extractor`] trait. [`CssExtractor`] is the
//! selector strategy matching the current markup.

use crate::scrape::TrendingEntry;
use crate::DigestError;
use scraper::{ElementRef, Html, Selector};

const ROW_SELECTOR: &str = "article.Box-row";
const TITLE_SELECTOR: &str = "h2 a[href]";
const DESCRIPTION_SELECTOR: &str = "p.col-9.color-fg-muted.my-1.pr-4";
const STARS_SELECTOR: &str = r#"a[href$="/stargazers"]"#;

/// Turns a trending page into ranked entries
pub trait Extractor {
    /// Returns entries in page order
    ///
    /// Missing optional fields never fail extraction; a row without a title
    /// link is dropped.
    fn extract(&self, html: &str) -> Vec<TrendingEntry>;
}

/// Selector-based extractor for the GitHub trending markup
#[derive(Debug)]
pub struct CssExtractor {
    origin: String,
    max_rows: usize,
    row: Selector,
    title: Selector,
    description: Selector,
    stars: Selector,
}

impl CssExtractor {
    /// Creates an extractor
    ///
    /// # Arguments
    ///
    /// * `origin` - Prefix for the relative repository links
    /// * `max_rows` - Rows considered, counted before skipping
    pub fn new(origin: &str, max_rows: usize) -> Result<Self, DigestError> {
        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            max_rows,
            row: parse_selector(ROW_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            description: parse_selector(DESCRIPTION_SELECTOR)?,
            stars: parse_selector(STARS_SELECTOR)?,
        })
    }

    fn extract_row(&self, row: ElementRef<'_>) -> Option<TrendingEntry> {
        let anchor = row.select(&self.title).next()?;
        let href = anchor.value().attr("href").unwrap_or("").trim();
        let url = format!("{}{}", self.origin, href);
        let name = normalize_name(&element_text(anchor));

        let description = row
            .select(&self.description)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let stars = row
            .select(&self.stars)
            .next()
            .and_then(|el| parse_star_count(&element_text(el)))
            .unwrap_or(0);

        Some(TrendingEntry {
            name,
            url,
            stars,
            description,
        })
    }
}

impl Extractor for CssExtractor {
    fn extract(&self, html: &str) -> Vec<TrendingEntry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        for (index, row) in document.select(&self.row).take(self.max_rows).enumerate() {
            match self.extract_row(row) {
                Some(entry) => {
                    tracing::debug!("Row {}: {} ({} stars)", index + 1, entry.name, entry.stars);
                    entries.push(entry);
                }
                None => tracing::warn!("Row {} has no title link, skipping", index + 1),
            }
        }

        entries
    }
}

fn parse_selector(selector: &str) -> Result<Selector, DigestError> {
    Selector::parse(selector).map_err(|e| DigestError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Visible text of an element: stripped text nodes joined by single spaces
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses whitespace and joins `owner / repo` into `owner/repo`
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" / ", "/")
}

/// Parses a star count such as `"12,345"`, ignoring every non-digit
///
/// Returns `None` when no digits remain or the value overflows.
pub fn parse_star_count(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}
