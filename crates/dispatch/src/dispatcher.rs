//! Lead dispatcher
//!
//! Orchestrates summary generation and payload delivery for one escalated
//! conversation. The summary comes from the chat delegate when available;
//! summary failure degrades to a placeholder and never blocks delivery.

use std::sync::Arc;

use lead_agent_core::{LeadStatus, SessionProfile, Transcript};
use lead_agent_delegate::ChatDelegate;

use crate::payload::{build_contact_embed, build_lead_embeds, ContactSubmission};
use crate::sink::LeadSink;

/// Sent to the visitor after a successful lead dispatch
pub const DISPATCH_SUCCESS_REPLY: &str = "Perfect! ✅ I've sent your conversation to Vicky. He'll reach out within 24-48 hours with a detailed plan and next steps!";

/// Sent when dispatch fails and the visitor needs a direct contact route
pub const CONTACT_FALLBACK_REPLY: &str = "I had a small issue sending to Discord, but you can reach Vicky directly at npdimagine@gmail.com or +91 83838 48219";

/// Placeholder when summary generation fails
const SUMMARY_FALLBACK: &str = "Unable to generate summary - see full conversation below.";

pub struct LeadDispatcher {
    sink: Arc<dyn LeadSink>,
    delegate: Option<Arc<dyn ChatDelegate>>,
}

impl LeadDispatcher {
    pub fn new(sink: Arc<dyn LeadSink>, delegate: Option<Arc<dyn ChatDelegate>>) -> Self {
        Self { sink, delegate }
    }

    async fn summarize(&self, transcript: &Transcript) -> String {
        let Some(delegate) = &self.delegate else {
            return SUMMARY_FALLBACK.to_string();
        };

        match delegate.summarize(&transcript.render_markdown()).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(error = %err, "Summary generation failed, using placeholder");
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    /// Deliver a lead notification for an escalated conversation.
    /// Returns whether delivery succeeded.
    pub async fn dispatch(
        &self,
        transcript: &Transcript,
        profile: &SessionProfile,
        status: LeadStatus,
    ) -> bool {
        let summary = self.summarize(transcript).await;
        let payload = build_lead_embeds(transcript, profile, status, &summary);

        match self.sink.deliver(&payload).await {
            Ok(()) => {
                tracing::info!(status = %status, messages = transcript.len(), "Lead dispatched");
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Lead dispatch failed");
                false
            }
        }
    }

    /// Deliver a contact form submission. Returns whether delivery succeeded.
    pub async fn dispatch_contact(&self, submission: &ContactSubmission) -> bool {
        let payload = build_contact_embed(submission);

        match self.sink.deliver(&payload).await {
            Ok(()) => {
                tracing::info!(email = %submission.email, "Contact form dispatched");
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Contact form dispatch failed");
                false
            }
        }
    }
}
