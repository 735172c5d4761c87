//! Email API client
//!
//! The dispatcher only sees the [`EmailSender`] trait; [`ResendClient`]
//! implements it against the Resend HTTP API.

use crate::DispatchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// A message ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Message id assigned by the provider, when the response carried one
    pub id: Option<String>,

    /// Response body exactly as returned
    pub raw: String,
}

/// Something that can submit an email
#[async_trait]
pub trait EmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, DispatchError>;
}

/// Resend API client
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl ResendClient {
    /// Creates a client posting to `{base_url}/emails`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use trending_digest::mailer::ResendClient;
    ///
    /// let client = ResendClient::new("re_123", "https://api.resend.com", Duration::from_secs(30)).unwrap();
    /// ```
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("trending-digest/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, DispatchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|source| DispatchError::Request { source })?;

        let status = response.status();

        let raw = response
            .text()
            .await
            .map_err(|source| DispatchError::Request { source })?;

        if !status.is_success() {
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        Ok(SendReceipt {
            id: json_field(&raw, "id"),
            raw,
        })
    }
}

/// The provider's `message` field, or the whole body when it has none
fn error_message(body: &str) -> String {
    json_field(body, "message").unwrap_or_else(|| body.trim().to_string())
}

fn json_field(body: &str, field: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get(field)?
        .as_str()
        .map(str::to_string)
}
