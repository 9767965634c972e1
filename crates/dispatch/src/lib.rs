//! Lead dispatch
//!
//! Turns a qualified conversation into a notification payload and delivers it
//! to the configured webhook sink. Dispatch is best-effort: delivery failure
//! is reported to the caller as a boolean and never aborts the conversation.

pub mod dispatcher;
pub mod payload;
pub mod sink;

pub use dispatcher::{LeadDispatcher, CONTACT_FALLBACK_REPLY, DISPATCH_SUCCESS_REPLY};
pub use payload::{build_contact_embed, build_lead_embeds, ContactSubmission};
pub use sink::{LeadSink, WebhookLeadSink};

use thiserror::Error;

/// Sink delivery errors
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Webhook sink not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sink returned status {0}")]
    Status(u16),
}
