//! Conversation turns and the session transcript

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role in a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// Visitor message
    User,
    /// Agent reply
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }

    /// Display label used when rendering a transcript for a lead notification
    pub fn transcript_label(&self) -> &'static str {
        match self {
            TurnRole::User => "User",
            TurnRole::Assistant => "Bot",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single turn in the conversation
///
/// Immutable once appended to a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Role of the speaker
    pub role: TurnRole,
    /// Content of the turn
    pub text: String,
    /// When the turn occurred
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a new turn
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }
}

/// Ordered, append-only log of conversation turns for one session
///
/// Insertion order is significant: the transcript is used both for the chat
/// history sent to the delegate and for composing the lead notification body.
/// Turns are never mutated or removed after append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to the end of the transcript
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Number of turns so far
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All turns in insertion order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Last turn, if any
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Render the transcript as alternating `**User:**` / `**Bot:**` blocks
    /// separated by blank lines, the format expected by the lead sink.
    pub fn render_markdown(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("**{}:** {}", turn.role.transcript_label(), turn.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_creation() {
        let turn = Turn::user("I need a chatbot for my store");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.text, "I need a chatbot for my store");

        let turn = Turn::assistant("Happy to help!");
        assert_eq!(turn.role, TurnRole::Assistant);
    }

    #[test]
    fn test_transcript_append_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Turn::user("hello"));
        transcript.push(Turn::assistant("hi there"));
        transcript.push(Turn::user("pricing?"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[0].text, "hello");
        assert_eq!(transcript.last().unwrap().text, "pricing?");
    }

    #[test]
    fn test_render_markdown() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hello"));
        transcript.push(Turn::assistant("hi there"));

        assert_eq!(
            transcript.render_markdown(),
            "**User:** hello\n\n**Bot:** hi there"
        );
    }

    #[test]
    fn test_role_serde_labels() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        assert_eq!(TurnRole::User.transcript_label(), "User");
        assert_eq!(TurnRole::Assistant.transcript_label(), "Bot");
    }
}
