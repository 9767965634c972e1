//! Interest classification
//!
//! Decides whether a conversation should be escalated to the lead sink.
//! Matching is literal containment over the lowercased text only; no
//! stemming, no punctuation stripping.

use lead_agent_core::SessionProfile;

/// Phrases that count as the user agreeing to be connected
const SEND_TRIGGERS: &[&str] = &[
    "send",
    "contact vicky",
    "reach out",
    "yes send",
    "yes please",
    "go ahead",
    "sure",
    "okay",
    "ok",
    "confirm",
    "book a call",
    "schedule",
    "interested",
];

/// Phrases that signal strong commitment regardless of the bot reply
const STRONG_COMMITMENT: &[&str] = &["deal", "hire", "budget is"];

/// Escalate once the profile has an email and the transcript reaches this
/// many turns
const ENGAGED_TURN_THRESHOLD: usize = 6;

/// Classifies whether the latest exchange qualifies the conversation as a
/// lead
pub struct InterestClassifier;

impl InterestClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Pure OR of three independent predicates; short-circuits but the
    /// order never changes the result.
    pub fn should_escalate(
        &self,
        user_message: &str,
        bot_reply: &str,
        profile: &SessionProfile,
        transcript_len: usize,
    ) -> bool {
        let lower_msg = user_message.to_lowercase();
        let lower_bot = bot_reply.to_lowercase();

        // Bot proposed escalation and user agreed
        let bot_offered = lower_bot.contains("send") && lower_bot.contains("vicky");
        let user_agreed = SEND_TRIGGERS.iter().any(|t| lower_msg.contains(t));
        if bot_offered && user_agreed {
            return true;
        }

        // Strong commitment language stands on its own
        if STRONG_COMMITMENT.iter().any(|t| lower_msg.contains(t)) {
            return true;
        }

        // Engaged conversation with a known email
        profile.email.is_some() && transcript_len >= ENGAGED_TURN_THRESHOLD
    }
}

impl Default for InterestClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_email() -> SessionProfile {
        SessionProfile {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_engaged_threshold() {
        let classifier = InterestClassifier::new();
        let profile = profile_with_email();

        // Six turns with an email on file escalates regardless of content
        assert!(classifier.should_escalate("nice weather", "indeed", &profile, 6));
        // Five turns does not
        assert!(!classifier.should_escalate("nice weather", "indeed", &profile, 5));
        // Six turns without an email does not
        assert!(!classifier.should_escalate(
            "nice weather",
            "indeed",
            &SessionProfile::default(),
            6
        ));
    }

    #[test]
    fn test_bot_offer_plus_agreement() {
        let classifier = InterestClassifier::new();
        let profile = SessionProfile::default();

        assert!(classifier.should_escalate(
            "yes please",
            "Shall I send this conversation to Vicky?",
            &profile,
            2
        ));
        // Offer without agreement
        assert!(!classifier.should_escalate(
            "tell me more",
            "Shall I send this conversation to Vicky?",
            &profile,
            2
        ));
        // Agreement without an offer
        assert!(!classifier.should_escalate("yes please", "Here is more detail.", &profile, 2));
    }

    #[test]
    fn test_strong_commitment() {
        let classifier = InterestClassifier::new();
        let profile = SessionProfile::default();

        assert!(classifier.should_escalate("let's close the deal", "great!", &profile, 1));
        assert!(classifier.should_escalate("we want to hire you", "great!", &profile, 1));
        assert!(classifier.should_escalate("our budget is 50k", "noted", &profile, 1));
        assert!(!classifier.should_escalate("just browsing", "sure", &profile, 1));
    }

    #[test]
    fn test_containment_only_no_normalization() {
        let classifier = InterestClassifier::new();
        let profile = SessionProfile::default();

        // "okay" is found inside longer words too; containment is literal
        assert!(classifier.should_escalate(
            "ok!",
            "I can send everything to Vicky now",
            &profile,
            2
        ));
    }
}
