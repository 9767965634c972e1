//! HTTP chat delegate implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use lead_agent_core::Turn;

use crate::DelegateError;

/// Prompt used to request a lead summary before dispatch
const SUMMARY_PROMPT_PREFIX: &str = "Summarize this sales conversation in 3-4 sentences. \
Focus on: user's needs, budget range mentioned, interest level, and next steps. Conversation:\n\n";

/// Chat delegate boundary
///
/// One call per user message; the caller owns the transcript and passes the
/// trailing history window explicitly.
#[async_trait]
pub trait ChatDelegate: Send + Sync {
    /// Request a free-form reply for the given message and history
    async fn chat(&self, message: &str, history: &[Turn]) -> Result<String, DelegateError>;

    /// Request a short summary of a rendered transcript (used by the lead
    /// dispatcher; failures are non-fatal there)
    async fn summarize(&self, rendered_transcript: &str) -> Result<String, DelegateError> {
        let prompt = format!("{}{}", SUMMARY_PROMPT_PREFIX, rendered_transcript);
        self.chat(&prompt, &[]).await
    }
}

/// Wire format for one history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub text: String,
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            text: turn.text.clone(),
        }
    }
}

/// Chat request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateRequest {
    pub message: String,
    pub conversation_history: Vec<HistoryEntry>,
}

/// Chat response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateResponse {
    pub response: String,
}

/// Chat delegate over HTTP
#[derive(Clone)]
pub struct HttpChatDelegate {
    client: Client,
    endpoint: String,
    history_window: usize,
}

impl HttpChatDelegate {
    /// Create a new delegate client with a bounded request timeout
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        history_window: usize,
    ) -> Result<Self, DelegateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DelegateError::Request)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            history_window,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatDelegate for HttpChatDelegate {
    async fn chat(&self, message: &str, history: &[Turn]) -> Result<String, DelegateError> {
        if self.endpoint.is_empty() {
            return Err(DelegateError::NotConfigured);
        }

        let window_start = history.len().saturating_sub(self.history_window);
        let request = DelegateRequest {
            message: message.to_string(),
            conversation_history: history[window_start..].iter().map(HistoryEntry::from).collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Delegate returned error status");
            return Err(DelegateError::Status(status.as_u16()));
        }

        let body: DelegateResponse = response
            .json()
            .await
            .map_err(|e| DelegateError::InvalidResponse(e.to_string()))?;

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let history = vec![Turn::user("hi"), Turn::assistant("hello!")];
        let request = DelegateRequest {
            message: "pricing?".to_string(),
            conversation_history: history.iter().map(HistoryEntry::from).collect(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["message"], "pricing?");
        assert_eq!(json["conversation_history"][0]["role"], "user");
        assert_eq!(json["conversation_history"][1]["role"], "assistant");
        assert_eq!(json["conversation_history"][1]["text"], "hello!");
    }

    #[test]
    fn test_response_deserialization() {
        let body: DelegateResponse =
            serde_json::from_str(r#"{"response":"Happy to help!"}"#).unwrap();
        assert_eq!(body.response, "Happy to help!");
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint_fails() {
        let delegate =
            HttpChatDelegate::new("", Duration::from_secs(1), 10).unwrap();
        let result = delegate.chat("hello", &[]).await;
        assert!(matches!(result, Err(DelegateError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        // Port 9 (discard) is almost certainly closed; any failure mode is
        // acceptable as long as it surfaces as an error, not a panic.
        let delegate = HttpChatDelegate::new(
            "http://127.0.0.1:9/api/chat",
            Duration::from_secs(1),
            10,
        )
        .unwrap();
        assert!(delegate.chat("hello", &[]).await.is_err());
    }

    #[test]
    fn test_history_window_bounds() {
        let delegate =
            HttpChatDelegate::new("http://localhost:9000", Duration::from_secs(1), 2).unwrap();
        assert_eq!(delegate.history_window, 2);

        // saturating_sub keeps the window valid for short histories
        let history = vec![Turn::user("only one")];
        let start = history.len().saturating_sub(delegate.history_window);
        assert_eq!(start, 0);
    }
}
