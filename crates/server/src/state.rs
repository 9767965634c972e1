//! Shared application state

use std::sync::Arc;

use dashmap::DashMap;

use lead_agent_config::Settings;
use lead_agent_core::Session;
use lead_agent_dispatch::LeadDispatcher;
use lead_agent_engine::LeadEngine;

/// State shared across all request handlers
///
/// Sessions live in memory only; a restart drops every conversation, which
/// matches the widget's page-lifetime session model.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub sessions: Arc<DashMap<String, Session>>,
    pub engine: Arc<LeadEngine>,
    pub dispatcher: Arc<LeadDispatcher>,
}

impl AppState {
    pub fn new(config: Settings, engine: Arc<LeadEngine>, dispatcher: Arc<LeadDispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(DashMap::new()),
            engine,
            dispatcher,
        }
    }

    /// Take a session out of the store, creating it if absent
    ///
    /// The session is removed rather than borrowed so no map guard is held
    /// across the engine's await points; callers must put it back with
    /// [`AppState::store_session`] when done.
    pub fn take_session(&self, id: Option<String>) -> Session {
        match id {
            Some(id) => self
                .sessions
                .remove(&id)
                .map(|(_, session)| session)
                .unwrap_or_else(|| Session::new(id)),
            None => Session::with_random_id(),
        }
    }

    pub fn store_session(&self, session: Session) {
        self.sessions.insert(session.id.clone(), session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_agent_core::Turn;
    use lead_agent_dispatch::WebhookLeadSink;
    use std::time::Duration;

    fn state() -> AppState {
        let sink = Arc::new(WebhookLeadSink::new("", Duration::from_secs(1)).unwrap());
        let dispatcher = Arc::new(LeadDispatcher::new(sink, None));
        let delegate = Arc::new(
            lead_agent_delegate::HttpChatDelegate::new("", Duration::from_secs(1), 10).unwrap(),
        );
        let engine = Arc::new(LeadEngine::new(delegate, dispatcher.clone()));
        AppState::new(Settings::default(), engine, dispatcher)
    }

    #[test]
    fn test_take_session_creates_when_absent() {
        let state = state();
        let session = state.take_session(Some("conv_x".to_string()));
        assert_eq!(session.id, "conv_x");
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_session_roundtrip() {
        let state = state();
        let mut session = state.take_session(Some("conv_y".to_string()));
        session.transcript.push(Turn::user("hello"));
        state.store_session(session);

        let session = state.take_session(Some("conv_y".to_string()));
        assert_eq!(session.transcript.len(), 1);
        // Taking removes from the store
        assert!(state.sessions.get("conv_y").is_none());
    }
}
