//! Per-message orchestration

use std::sync::Arc;

use lead_agent_core::{LeadStatus, Session, Turn};
use lead_agent_delegate::ChatDelegate;
use lead_agent_dispatch::{LeadDispatcher, CONTACT_FALLBACK_REPLY};

use crate::extractor::DetailExtractor;
use crate::interest::InterestClassifier;
use crate::resolver::{ResponseResolver, Resolution};

/// Result of processing one user message
pub struct EngineReply {
    /// Text to show the visitor
    pub text: String,
    /// Whether this message escalated the conversation to a lead
    pub escalated: bool,
    /// Dispatch outcome when an escalation happened
    pub dispatched: Option<bool>,
}

/// Full message pipeline: extract, resolve, classify, dispatch
pub struct LeadEngine {
    extractor: DetailExtractor,
    classifier: InterestClassifier,
    resolver: ResponseResolver,
    dispatcher: Arc<LeadDispatcher>,
}

impl LeadEngine {
    pub fn new(delegate: Arc<dyn ChatDelegate>, dispatcher: Arc<LeadDispatcher>) -> Self {
        Self {
            extractor: DetailExtractor::new(),
            classifier: InterestClassifier::new(),
            resolver: ResponseResolver::new(delegate),
            dispatcher,
        }
    }

    /// Process one user message against a session
    ///
    /// The user turn and the produced reply are both appended to the
    /// transcript before classification, so the engaged-turn threshold
    /// counts the current exchange.
    pub async fn handle_message(&self, session: &mut Session, text: &str) -> EngineReply {
        session.transcript.push(Turn::user(text));
        self.extractor.extract(text, &mut session.profile);

        let Resolution {
            reply,
            escalate,
            delegated,
        } = self.resolver.resolve(session, text).await;
        session.transcript.push(Turn::assistant(reply.clone()));

        let status = match escalate {
            Some(status) => Some(status),
            None if self.classifier.should_escalate(
                text,
                &reply,
                &session.profile,
                session.transcript.len(),
            ) =>
            {
                Some(LeadStatus::DealConfirmed)
            }
            None => None,
        };

        let Some(status) = status else {
            tracing::debug!(session_id = %session.id, delegated, "Replied without escalation");
            return EngineReply {
                text: reply,
                escalated: false,
                dispatched: None,
            };
        };

        let delivered = self
            .dispatcher
            .dispatch(&session.transcript, &session.profile, status)
            .await;

        let text = if delivered {
            reply
        } else {
            format!("{reply}\n\n{CONTACT_FALLBACK_REPLY}")
        };

        EngineReply {
            text,
            escalated: true,
            dispatched: Some(delivered),
        }
    }

    /// Explicit send request (the visitor pressed the send-to-Vicky control)
    pub async fn dispatch_lead(&self, session: &Session, status: LeadStatus) -> bool {
        self.dispatcher
            .dispatch(&session.transcript, &session.profile, status)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    use lead_agent_delegate::DelegateError;
    use lead_agent_dispatch::{LeadSink, SinkError};

    struct StubDelegate {
        fail: bool,
        reply: &'static str,
    }

    #[async_trait]
    impl ChatDelegate for StubDelegate {
        async fn chat(
            &self,
            _message: &str,
            _history: &[lead_agent_core::Turn],
        ) -> Result<String, DelegateError> {
            if self.fail {
                Err(DelegateError::Status(503))
            } else {
                Ok(self.reply.to_string())
            }
        }
    }

    struct RecordingSink {
        fail: bool,
        delivered: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn deliver(&self, payload: &Value) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Status(500));
            }
            self.delivered.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    fn engine(
        delegate_fails: bool,
        reply: &'static str,
        sink_fails: bool,
    ) -> (LeadEngine, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink {
            fail: sink_fails,
            delivered: Mutex::new(Vec::new()),
        });
        let dispatcher = Arc::new(LeadDispatcher::new(sink.clone(), None));
        let engine = LeadEngine::new(
            Arc::new(StubDelegate {
                fail: delegate_fails,
                reply,
            }),
            dispatcher,
        );
        (engine, sink)
    }

    #[tokio::test]
    async fn test_plain_exchange_no_escalation() {
        let (engine, sink) = engine(false, "Happy to explain our services!", false);
        let mut session = Session::new("conv_test");

        let result = engine.handle_message(&mut session, "tell me more").await;
        assert_eq!(result.text, "Happy to explain our services!");
        assert!(!result.escalated);
        assert!(result.dispatched.is_none());
        assert_eq!(session.transcript.len(), 2);
        assert!(sink.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extraction_feeds_profile() {
        let (engine, _sink) = engine(false, "Noted!", false);
        let mut session = Session::new("conv_test");

        engine
            .handle_message(&mut session, "I'm at jane@example.com, healthcare sector")
            .await;
        assert_eq!(session.profile.email.as_deref(), Some("jane@example.com"));
        assert_eq!(session.profile.industry.as_deref(), Some("healthcare"));
    }

    #[tokio::test]
    async fn test_commitment_escalates_and_dispatches() {
        let (engine, sink) = engine(false, "Wonderful!", false);
        let mut session = Session::new("conv_test");

        let result = engine
            .handle_message(&mut session, "it's a deal, let's start")
            .await;
        assert!(result.escalated);
        assert_eq!(result.dispatched, Some(true));
        assert_eq!(result.text, "Wonderful!");

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(
            delivered[0]["embeds"][0]["fields"][4]["value"],
            "DEAL_CONFIRMED"
        );
    }

    #[tokio::test]
    async fn test_dispatch_failure_appends_contact_route() {
        let (engine, _sink) = engine(false, "Wonderful!", true);
        let mut session = Session::new("conv_test");

        let result = engine.handle_message(&mut session, "we want to hire you").await;
        assert!(result.escalated);
        assert_eq!(result.dispatched, Some(false));
        assert!(result.text.starts_with("Wonderful!"));
        assert!(result.text.contains("npdimagine@gmail.com"));
    }

    #[tokio::test]
    async fn test_delegate_outage_first_then_escalation() {
        let (engine, sink) = engine(true, "", false);
        let mut session = Session::new("conv_test");

        // First failure collects details, no dispatch
        let first = engine.handle_message(&mut session, "hello").await;
        assert!(first.text.contains("technical hiccup"));
        assert!(!first.escalated);

        // Second failure with an email on file escalates as contact_requested
        let second = engine
            .handle_message(&mut session, "sure, jane@example.com")
            .await;
        assert!(second.escalated);
        assert_eq!(second.dispatched, Some(true));

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(
            delivered[0]["embeds"][0]["fields"][4]["value"],
            "CONTACT_REQUESTED"
        );
    }

    #[tokio::test]
    async fn test_explicit_dispatch() {
        let (engine, sink) = engine(false, "hi", false);
        let mut session = Session::new("conv_test");
        session.transcript.push(Turn::user("hello"));

        assert!(engine.dispatch_lead(&session, LeadStatus::Interested).await);
        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered[0]["embeds"][0]["fields"][4]["value"], "INTERESTED");
    }
}
