//! Session profile and lead status

use serde::{Deserialize, Serialize};

/// Per-session accumulator of extracted visitor details
///
/// Fields follow last-match-wins semantics: a later message with a stronger
/// match overwrites the stored value, but a field set to `Some` is never
/// reset to `None` within a session (extraction only writes on match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    /// Visitor email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Visitor phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Detected industry keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Visitor name (only ever supplied explicitly, e.g. via the contact form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SessionProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any contact detail has been captured
    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}

/// Status label attached to an escalated lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Visitor showed interest but no explicit commitment
    Interested,
    /// Visitor agreed to be contacted or used strong-commitment language
    DealConfirmed,
    /// Visitor asked to be contacted (or details were collected after a
    /// delegate outage)
    ContactRequested,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Interested => "interested",
            LeadStatus::DealConfirmed => "deal_confirmed",
            LeadStatus::ContactRequested => "contact_requested",
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::Interested
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_starts_empty() {
        let profile = SessionProfile::new();
        assert!(profile.email.is_none());
        assert!(profile.phone.is_none());
        assert!(profile.industry.is_none());
        assert!(!profile.has_contact());
    }

    #[test]
    fn test_has_contact() {
        let mut profile = SessionProfile::new();
        profile.phone = Some("9876543210".to_string());
        assert!(profile.has_contact());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LeadStatus::Interested.as_str(), "interested");
        assert_eq!(LeadStatus::DealConfirmed.as_str(), "deal_confirmed");
        assert_eq!(LeadStatus::ContactRequested.as_str(), "contact_requested");

        let json = serde_json::to_string(&LeadStatus::DealConfirmed).unwrap();
        assert_eq!(json, "\"deal_confirmed\"");
    }
}
