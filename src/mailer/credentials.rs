use crate::mailer::Recipients;
use crate::ConfigError;
use std::fmt;

/// Environment variable holding the Resend API key
pub const API_KEY_VAR: &str = "RESEND_API_KEY";

/// Environment variable holding the sender address
pub const SENDER_VAR: &str = "SENDER_EMAIL";

/// Environment variable holding the raw recipient list
pub const RECIPIENT_VAR: &str = "RECIPIENT_EMAIL";

/// Mail settings supplied out of band
///
/// Read once at process start and passed by value; nothing below `main`
/// touches the environment.
#[derive(Clone, Default)]
pub struct MailCredentials {
    pub api_key: String,
    pub sender: String,
    pub recipients: String,
}

impl MailCredentials {
    /// Reads the three variables from the process environment
    ///
    /// Unset variables become empty strings; [`MailCredentials::validate`]
    /// reports them.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds credentials from any name → value lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).unwrap_or_default().trim().to_string();

        Self {
            api_key: read(API_KEY_VAR),
            sender: read(SENDER_VAR),
            recipients: read(RECIPIENT_VAR),
        }
    }

    /// Checks every value is present and resolves the recipient list
    pub fn validate(&self) -> Result<Recipients, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::Missing(API_KEY_VAR.to_string()));
        }

        if self.sender.is_empty() {
            return Err(ConfigError::Missing(SENDER_VAR.to_string()));
        }

        if self.recipients.is_empty() {
            return Err(ConfigError::Missing(RECIPIENT_VAR.to_string()));
        }

        let recipients = Recipients::parse(&self.recipients);
        if recipients.is_empty() {
            return Err(ConfigError::NoRecipients(RECIPIENT_VAR.to_string()));
        }

        Ok(recipients)
    }
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("api_key", &"<redacted>")
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .finish()
    }
}
