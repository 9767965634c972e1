//! Notification payload construction
//!
//! The sink speaks the Discord webhook embed format. Two embeds per lead:
//! a summary card with the extracted details, and the full transcript.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use lead_agent_core::{LeadStatus, SessionProfile, Transcript};

/// Discord caps embed descriptions at 4096 chars; the transcript embed stays
/// under that with room for the truncation marker
pub const TRANSCRIPT_MAX_CHARS: usize = 4000;

/// Appended when the rendered transcript exceeds the limit
pub const TRUNCATION_MARKER: &str = "\n\n...[Conversation truncated]";

const LEAD_EMBED_COLOR: u32 = 3_066_993;
const TRANSCRIPT_EMBED_COLOR: u32 = 5_814_783;

/// Contact form submission forwarded to the sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Truncate to a character budget, appending the marker only when the text
/// actually exceeds it. Counts chars, not bytes, so the cut never lands
/// inside a multi-byte sequence.
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

fn now_display() -> String {
    Utc::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Build the two-embed lead notification body
pub fn build_lead_embeds(
    transcript: &Transcript,
    profile: &SessionProfile,
    status: LeadStatus,
    summary: &str,
) -> Value {
    let rendered = transcript.render_markdown();
    let message_count = transcript.len();

    json!({
        "embeds": [
            {
                "title": "🎯 New Lead from AI Chatbot!",
                "color": LEAD_EMBED_COLOR,
                "description": format!("**📊 AI-Generated Summary:**\n{summary}"),
                "fields": [
                    {
                        "name": "📧 Email",
                        "value": profile.email.as_deref().unwrap_or("❌ Not provided"),
                        "inline": true
                    },
                    {
                        "name": "📱 Phone",
                        "value": profile.phone.as_deref().unwrap_or("❌ Not provided"),
                        "inline": true
                    },
                    {
                        "name": "🏢 Industry",
                        "value": profile.industry.as_deref().unwrap_or("Not specified"),
                        "inline": true
                    },
                    {
                        "name": "💬 Message Count",
                        "value": format!("{message_count} messages"),
                        "inline": true
                    },
                    {
                        "name": "🔥 Interest Level",
                        "value": status.as_str().to_uppercase(),
                        "inline": true
                    },
                    {
                        "name": "⏰ Time",
                        "value": now_display(),
                        "inline": true
                    }
                ],
                "footer": { "text": "VICKY AI SYSTEMS - Chatbot Lead" },
                "timestamp": Utc::now().to_rfc3339()
            },
            {
                "title": "💬 Full Conversation Transcript",
                "color": TRANSCRIPT_EMBED_COLOR,
                "description": truncate_with_marker(&rendered, TRANSCRIPT_MAX_CHARS),
                "footer": { "text": format!("Total: {message_count} messages") }
            }
        ]
    })
}

/// Build the contact form notification body
pub fn build_contact_embed(submission: &ContactSubmission) -> Value {
    json!({
        "embeds": [
            {
                "title": "🚀 New Contact Form Submission",
                "color": TRANSCRIPT_EMBED_COLOR,
                "fields": [
                    { "name": "👤 Name", "value": submission.name, "inline": true },
                    { "name": "📧 Email", "value": submission.email, "inline": true },
                    {
                        "name": "🏢 Company",
                        "value": submission.company.as_deref().unwrap_or("Not provided"),
                        "inline": true
                    },
                    {
                        "name": "🎯 Service",
                        "value": submission.service.as_deref().unwrap_or("General Inquiry"),
                        "inline": true
                    },
                    {
                        "name": "💰 Budget",
                        "value": submission.budget.as_deref().unwrap_or("Not specified"),
                        "inline": true
                    },
                    {
                        "name": "⏰ Timeline",
                        "value": submission.timeline.as_deref().unwrap_or("Not specified"),
                        "inline": true
                    },
                    {
                        "name": "📝 Message",
                        "value": submission.message.as_deref().unwrap_or("No message provided"),
                        "inline": false
                    }
                ],
                "footer": { "text": "Vicky AI Systems | Contact Form" },
                "timestamp": Utc::now().to_rfc3339()
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_agent_core::Turn;

    #[test]
    fn test_truncation_preserves_prefix() {
        let text = "a".repeat(4100);
        let truncated = truncate_with_marker(&text, TRANSCRIPT_MAX_CHARS);
        assert!(truncated.starts_with(&"a".repeat(TRANSCRIPT_MAX_CHARS)));
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            truncated.chars().count(),
            TRANSCRIPT_MAX_CHARS + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_truncation_noop_under_limit() {
        assert_eq!(truncate_with_marker("short", TRANSCRIPT_MAX_CHARS), "short");
        // Exactly at the limit gets no marker
        let exact = "b".repeat(TRANSCRIPT_MAX_CHARS);
        assert_eq!(truncate_with_marker(&exact, TRANSCRIPT_MAX_CHARS), exact);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Multi-byte chars must not cause a mid-sequence slice
        let text = "🚀".repeat(10);
        let truncated = truncate_with_marker(&text, 5);
        assert!(truncated.starts_with(&"🚀".repeat(5)));
        assert!(truncated.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_lead_embed_placeholders() {
        let transcript = Transcript::new();
        let profile = SessionProfile::new();
        let body = build_lead_embeds(&transcript, &profile, LeadStatus::Interested, "summary");

        let fields = &body["embeds"][0]["fields"];
        assert_eq!(fields[0]["value"], "❌ Not provided");
        assert_eq!(fields[1]["value"], "❌ Not provided");
        assert_eq!(fields[2]["value"], "Not specified");
        assert_eq!(fields[3]["value"], "0 messages");
        assert_eq!(fields[4]["value"], "INTERESTED");
        assert_eq!(body["embeds"][0]["description"], "**📊 AI-Generated Summary:**\nsummary");
    }

    #[test]
    fn test_lead_embed_with_details() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hi"));
        transcript.push(Turn::assistant("hello"));

        let profile = SessionProfile {
            email: Some("a@b.com".to_string()),
            phone: Some("9876543210".to_string()),
            industry: Some("healthcare".to_string()),
            name: None,
        };

        let body = build_lead_embeds(&transcript, &profile, LeadStatus::DealConfirmed, "s");
        let fields = &body["embeds"][0]["fields"];
        assert_eq!(fields[0]["value"], "a@b.com");
        assert_eq!(fields[4]["value"], "DEAL_CONFIRMED");
        assert_eq!(
            body["embeds"][1]["description"],
            "**User:** hi\n\n**Bot:** hello"
        );
        assert_eq!(body["embeds"][1]["footer"]["text"], "Total: 2 messages");
    }

    #[test]
    fn test_contact_embed_defaults() {
        let submission = ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            company: None,
            service: None,
            budget: None,
            timeline: None,
            message: None,
        };

        let body = build_contact_embed(&submission);
        let fields = &body["embeds"][0]["fields"];
        assert_eq!(fields[0]["value"], "Jane");
        assert_eq!(fields[2]["value"], "Not provided");
        assert_eq!(fields[3]["value"], "General Inquiry");
        assert_eq!(fields[6]["value"], "No message provided");
    }
}
