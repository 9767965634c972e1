//! Session state owned by one conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conversation::Transcript;
use crate::profile::SessionProfile;

/// State for one chat session
///
/// Replaces the ambient globals of the original widget: the profile and
/// transcript are owned here and passed explicitly into each operation.
/// One message is processed at a time per session, so no internal locking
/// is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    pub id: String,
    /// Extracted visitor details
    pub profile: SessionProfile,
    /// Ordered conversation history
    pub transcript: Transcript,
    /// Whether the first-failure detail-collection message has been shown
    pub fallback_notified: bool,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: SessionProfile::new(),
            transcript: Transcript::new(),
            fallback_notified: false,
            created_at: Utc::now(),
        }
    }

    /// Create an empty session with a random id
    pub fn with_random_id() -> Self {
        Self::new(format!("conv_{}", uuid::Uuid::new_v4().simple()))
    }
}
