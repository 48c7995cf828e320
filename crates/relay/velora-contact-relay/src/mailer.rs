//! Outbound delivery.

use std::time::Duration;

use reqwest::Client;

use crate::config::RelayConfig;
use crate::email::OutboundEmail;
use crate::error::RelayError;

/// Seam between the HTTP handler and the mail provider. Tests substitute a
/// recording implementation here.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError>;
}

/// Delivery over the provider's HTTP API.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RelayError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(email)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "mail provider rejected the message");
            return Err(RelayError::Rejected(status.to_string()));
        }
        Ok(())
    }
}
