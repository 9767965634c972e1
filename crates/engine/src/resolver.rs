//! Response resolution
//!
//! Primary path is the chat delegate. When it fails, the first failure in a
//! session returns a detail-collection notice; later failures either escalate
//! (profile has an email, or the conversation is long enough) or fall back to
//! the scripted keyword table.

use std::sync::Arc;

use lead_agent_core::{LeadStatus, Session};
use lead_agent_delegate::ChatDelegate;

use crate::fallback::FallbackScript;

/// Shown once per session when the delegate first fails
const FIRST_FAILURE_NOTICE: &str = "I'm experiencing a small technical hiccup! 😅 But I'm still here to help!\n\nCould you please share your:\n• Name\n• Email\n• Phone (optional)\n• What you're looking for\n\nI'll make sure Vicky gets your message and responds within 24-48 hours!";

/// Shown when a repeated failure escalates the conversation instead
const FAILURE_ESCALATION_REPLY: &str = "Perfect! ✅ I've sent your details to Vicky. He'll reach out within 24-48 hours. In the meantime, feel free to fill out the contact form below for faster response! 🚀";

/// A conversation with this many turns is worth escalating even without
/// contact details confirmed by the user
const ESCALATION_TURN_THRESHOLD: usize = 6;

/// Outcome of resolving one user message
pub struct Resolution {
    pub reply: String,
    /// Set when the failure path decided to hand the lead off
    pub escalate: Option<LeadStatus>,
    /// Whether the reply came from the delegate rather than a script
    pub delegated: bool,
}

pub struct ResponseResolver {
    delegate: Arc<dyn ChatDelegate>,
    script: FallbackScript,
}

impl ResponseResolver {
    pub fn new(delegate: Arc<dyn ChatDelegate>) -> Self {
        Self {
            delegate,
            script: FallbackScript::new(),
        }
    }

    /// Resolve a reply for the latest user message. The message is expected
    /// to already be on the transcript.
    pub async fn resolve(&self, session: &mut Session, message: &str) -> Resolution {
        match self.delegate.chat(message, session.transcript.turns()).await {
            Ok(reply) => Resolution {
                reply,
                escalate: None,
                delegated: true,
            },
            Err(err) => {
                tracing::warn!(error = %err, session_id = %session.id, "Chat delegate failed, using fallback");
                self.resolve_fallback(session, message)
            }
        }
    }

    fn resolve_fallback(&self, session: &mut Session, message: &str) -> Resolution {
        if !session.fallback_notified {
            session.fallback_notified = true;
            return Resolution {
                reply: FIRST_FAILURE_NOTICE.to_string(),
                escalate: None,
                delegated: false,
            };
        }

        let qualified = session.profile.email.is_some()
            || session.transcript.len() >= ESCALATION_TURN_THRESHOLD;
        if qualified {
            return Resolution {
                reply: FAILURE_ESCALATION_REPLY.to_string(),
                escalate: Some(LeadStatus::ContactRequested),
                delegated: false,
            };
        }

        Resolution {
            reply: self.script.reply(message),
            escalate: None,
            delegated: false,
        }
    }
}
