//! Environment-driven configuration.

use std::env;

use crate::error::RelayError;

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";
const DEFAULT_FROM: &str = "Velora <contact@mail.velora.dev>";
const DEFAULT_RECIPIENTS: &str = "hello@velora.dev,sales@velora.dev,founders@velora.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for the relay.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Bearer token for the mail provider.
    pub api_key: String,
    /// Provider endpoint the composed email is POSTed to.
    pub endpoint: String,
    pub from: String,
    pub recipients: Vec<String>,
    pub timeout_secs: u64,
    pub port: u16,
}

impl RelayConfig {
    /// Read configuration from the environment. `EMAIL_API_KEY` is required;
    /// everything else has a default.
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key = env::var("EMAIL_API_KEY")
            .map_err(|_| RelayError::Config("EMAIL_API_KEY is not set".to_string()))?;

        let endpoint = env::var("EMAIL_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let from = env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());
        let recipients = env::var("EMAIL_RECIPIENTS")
            .unwrap_or_else(|_| DEFAULT_RECIPIENTS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        if recipients.is_empty() {
            return Err(RelayError::Config("EMAIL_RECIPIENTS is empty".to_string()));
        }

        let timeout_secs = match env::var("EMAIL_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| RelayError::Config(format!("bad EMAIL_TIMEOUT_SECS: {raw}")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| RelayError::Config(format!("bad PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            endpoint,
            from,
            recipients,
            timeout_secs,
            port,
        })
    }

    /// A config pointed at a local endpoint, for tests.
    pub fn for_tests(endpoint: impl Into<String>) -> Self {
        Self {
            api_key: "test-key".to_string(),
            endpoint: endpoint.into(),
            from: DEFAULT_FROM.to_string(),
            recipients: DEFAULT_RECIPIENTS.split(',').map(str::to_string).collect(),
            timeout_secs: 2,
            port: 0,
        }
    }
}
