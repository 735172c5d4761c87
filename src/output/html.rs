//! HTML email rendering
//!
//! Mail clients ignore stylesheets, so every element carries inline styles.
//! Rendering is pure string construction with no I/O; every value taken from
//! the page goes through maud's escaping.

use crate::scrape::TrendingEntry;
use maud::html;

const CELL: &str = "padding:10px 12px;border-bottom:1px solid #e5e7eb;vertical-align:top;";
const HEADER_CELL: &str =
    "padding:10px 12px;border-bottom:1px solid #e5e7eb;color:#374151;";

/// Date line and footer data for one report
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// Civil date of the report, `YYYY-MM-DD`
    pub date: String,

    /// Label of the zone the date was computed in, e.g. `UTC+08:00`
    pub zone: String,

    /// Page the entries were scraped from
    pub source_url: String,
}

/// Renders entries as an HTML fragment
///
/// Produces a heading, a date line, and a table with rank, linked name,
/// description and star count. An empty slice renders an empty table body.
///
/// # Arguments
///
/// * `entries` - Entries in rank order
/// * `header` - Date and source information
///
/// # Returns
///
/// The HTML fragment as a string
pub fn render_email(entries: &[TrendingEntry], header: &ReportHeader) -> String {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_row(index + 1, entry))
        .collect::<Vec<_>>()
        .join("\n");

    let mut html = String::new();

    html.push_str(
        "<div style=\"font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif;color:#111827;\">\n",
    );
    html.push_str(
        "  <h2 style=\"margin:0 0 8px 0;\">GitHub Trending (Daily &middot; All Languages)</h2>\n",
    );
    html.push_str(&format!(
        "  <div style=\"margin:0 0 16px 0;color:#6b7280;\">Date ({}): {}</div>\n",
        escaped(&header.zone),
        escaped(&header.date)
    ));

    // Table
    html.push_str("  <table style=\"width:100%;border-collapse:collapse;border:1px solid #e5e7eb;\">\n");
    html.push_str("    <thead>\n");
    html.push_str("      <tr style=\"background:#f9fafb;\">\n");
    html.push_str(&format!("        <th style=\"text-align:left;{HEADER_CELL}\">#</th>\n"));
    html.push_str(&format!("        <th style=\"text-align:left;{HEADER_CELL}\">Repository</th>\n"));
    html.push_str(&format!("        <th style=\"text-align:right;{HEADER_CELL}\">Stars</th>\n"));
    html.push_str("      </tr>\n");
    html.push_str("    </thead>\n");
    html.push_str("    <tbody>\n");
    if !rows.is_empty() {
        html.push_str(&rows);
        html.push('\n');
    }
    html.push_str("    </tbody>\n");
    html.push_str("  </table>\n");

    // Footer
    html.push_str(&format!(
        "  <div style=\"margin-top:14px;color:#9ca3af;font-size:12px;\">Source: <a href=\"{}\" style=\"color:#6b7280;text-decoration:none;\">GitHub Trending</a></div>\n",
        escaped(&header.source_url)
    ));
    html.push_str("</div>");

    html
}

fn render_row(rank: usize, entry: &TrendingEntry) -> String {
    let description = if entry.description.is_empty() {
        "&nbsp;".to_string()
    } else {
        escaped(&entry.description)
    };

    format!(
        "      <tr>\n\
         \x20       <td style=\"{CELL}color:#111827;\">{rank}</td>\n\
         \x20       <td style=\"{CELL}\">\n\
         \x20         <div style=\"font-weight:600;margin:0 0 6px 0;\"><a href=\"{url}\" style=\"color:#2563eb;text-decoration:none;\">{name}</a></div>\n\
         \x20         <div style=\"color:#6b7280;line-height:1.5;\">{description}</div>\n\
         \x20       </td>\n\
         \x20       <td style=\"{CELL}color:#111827;text-align:right;white-space:nowrap;\">{stars}</td>\n\
         \x20     </tr>",
        url = escaped(&entry.url),
        name = escaped(&entry.name),
        stars = format_thousands(entry.stars),
    )
}

/// Formats an integer with comma thousands separators: `12345` → `12,345`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Escapes page text for element content and double-quoted attributes
fn escaped(text: &str) -> String {
    html! { (text) }.into_string()
}
