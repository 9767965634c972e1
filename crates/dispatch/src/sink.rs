//! Webhook lead sink

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::SinkError;

/// Delivery boundary for lead notifications
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver one notification payload. Any non-2xx status is an error.
    async fn deliver(&self, payload: &Value) -> Result<(), SinkError>;
}

/// Sink posting payloads to a Discord-compatible webhook URL
#[derive(Clone)]
pub struct WebhookLeadSink {
    client: Client,
    webhook_url: String,
}

impl WebhookLeadSink {
    /// Create a sink with a bounded request timeout
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SinkError::Request)?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }
}

#[async_trait]
impl LeadSink for WebhookLeadSink {
    async fn deliver(&self, payload: &Value) -> Result<(), SinkError> {
        if self.webhook_url.is_empty() {
            return Err(SinkError::NotConfigured);
        }

        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Webhook sink rejected payload");
            return Err(SinkError::Status(status.as_u16()));
        }

        Ok(())
    }
}
