//! Mailer module for delivering the digest
//!
//! This module contains:
//! - Recipient list parsing
//! - Credentials collected from the environment at startup
//! - The `EmailSender` seam and its Resend HTTP implementation
//! - Dispatch with the sandboxed-account fallback

mod client;
mod credentials;
mod dispatch;
mod recipients;

pub use client::{EmailSender, OutgoingEmail, ResendClient, SendReceipt};
pub use credentials::{
    MailCredentials, API_KEY_VAR, RECIPIENT_VAR, SENDER_VAR,
};
pub use dispatch::{dispatch, sandbox_recipient};
pub use recipients::Recipients;
