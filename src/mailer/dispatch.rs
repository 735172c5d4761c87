//! Digest dispatch
//!
//! Sends the rendered digest and applies the single recovery this job has:
//! an account still in the provider's sandbox may only mail its owner, and
//! the rejection names that owner's address. The message is then resent to
//! that address alone, once.

use crate::mailer::{EmailSender, MailCredentials, OutgoingEmail, SendReceipt};
use crate::{DigestError, DispatchError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SANDBOX_PATTERN: Regex =
        Regex::new(r"(?i)own email address\s*\(\s*([^()\s]+@[^()\s]+)\s*\)")
            .expect("Failed to compile sandbox pattern");
}

/// Sends the digest to the configured recipients
///
/// # Arguments
///
/// * `sender` - The email collaborator
/// * `credentials` - Sender and raw recipient list from the environment
/// * `subject` - Subject line
/// * `html` - Rendered body
///
/// # Returns
///
/// * `Ok(SendReceipt)` - The first or the fallback send succeeded
/// * `Err(DigestError::Config)` - Missing credentials or no recipients
/// * `Err(DigestError::Dispatch)` - Send failed and no fallback applied, or
///   the fallback failed too
pub async fn dispatch<S>(
    sender: &S,
    credentials: &MailCredentials,
    subject: &str,
    html: &str,
) -> Result<SendReceipt, DigestError>
where
    S: EmailSender + ?Sized,
{
    let recipients = credentials.validate()?;

    let email = OutgoingEmail {
        from: credentials.sender.clone(),
        to: recipients.as_slice().to_vec(),
        subject: subject.to_string(),
        html: html.to_string(),
    };

    tracing::info!(
        "Sending '{}' from {} to {} recipient(s)",
        email.subject,
        email.from,
        recipients.len()
    );

    let error = match sender.send(&email).await {
        Ok(receipt) => return Ok(receipt),
        Err(error) => error,
    };

    let owner = match recovery_address(&error) {
        Some(owner) if !recipients.is_only(&owner) => owner,
        _ => return Err(error.into()),
    };

    tracing::warn!(
        "Sending account is sandboxed; resending to its owner {} only",
        owner
    );

    let fallback = OutgoingEmail {
        to: vec![owner],
        ..email
    };

    Ok(sender.send(&fallback).await?)
}

fn recovery_address(error: &DispatchError) -> Option<String> {
    match error {
        DispatchError::Rejected { message, .. } => sandbox_recipient(message),
        DispatchError::Request { .. } => None,
    }
}

/// Extracts the only permitted address from a sandbox rejection message
///
/// Returns `None` for any message that does not match, which callers treat
/// as "no recovery available".
///
/// # Example
///
/// ```
/// use trending_digest::mailer::sandbox_recipient;
///
/// let message = "You can only send testing emails to your own email address (owner@x.com).";
/// assert_eq!(sandbox_recipient(message).as_deref(), Some("owner@x.com"));
/// assert_eq!(sandbox_recipient("Invalid API key"), None);
/// ```
pub fn sandbox_recipient(message: &str) -> Option<String> {
    SANDBOX_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
