//! Output module for the digest email
//!
//! This module handles:
//! - Rendering trending entries as a self-contained HTML fragment
//! - Number and text formatting for that fragment

mod html;

pub use html::{format_thousands, render_email, ReportHeader};
