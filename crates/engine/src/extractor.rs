//! Detail extraction from free-text messages
//!
//! Scans each user message for email, phone, and industry mentions and
//! writes matches into the session profile. Last match wins per field;
//! a message with no match leaves the field untouched.

use regex::Regex;

use lead_agent_core::SessionProfile;

/// Ordered industry keyword list; the first keyword contained in the
/// lowercased message wins. Matching is literal containment with the keyword
/// exactly as listed, so the uppercase `IT` entry never matches lowercased
/// input.
const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharmacy",
    "healthcare",
    "ecommerce",
    "retail",
    "education",
    "finance",
    "real estate",
    "logistics",
    "manufacturing",
    "saas",
    "startup",
    "IT",
    "technology",
];

/// Extracts visitor details from chat messages
pub struct DetailExtractor {
    email_pattern: Regex,
    phone_patterns: Vec<Regex>,
}

impl DetailExtractor {
    pub fn new() -> Self {
        Self {
            email_pattern: Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap(),
            phone_patterns: Self::build_phone_patterns(),
        }
    }

    fn build_phone_patterns() -> Vec<Regex> {
        vec![
            // 10 digits, optional +91 country prefix
            Regex::new(r"(\+91[\s-]?)?\d{10}").unwrap(),
            // 5-5 grouped digits
            Regex::new(r"\d{5}[\s-]?\d{5}").unwrap(),
        ]
    }

    /// Scan a message and update the profile in place
    pub fn extract(&self, message: &str, profile: &mut SessionProfile) {
        if let Some(email) = self.extract_email(message) {
            tracing::debug!(email = %email, "Extracted email");
            profile.email = Some(email);
        }

        if let Some(phone) = self.extract_phone(message) {
            tracing::debug!(phone = %phone, "Extracted phone");
            profile.phone = Some(phone);
        }

        if let Some(industry) = self.extract_industry(message) {
            tracing::debug!(industry = %industry, "Detected industry");
            profile.industry = Some(industry);
        }
    }

    /// First substring matching the email shape
    pub fn extract_email(&self, message: &str) -> Option<String> {
        self.email_pattern
            .find(message)
            .map(|m| m.as_str().to_string())
    }

    /// First substring matching any phone pattern, in pattern order
    pub fn extract_phone(&self, message: &str) -> Option<String> {
        for pattern in &self.phone_patterns {
            if let Some(m) = pattern.find(message) {
                return Some(m.as_str().to_string());
            }
        }
        None
    }

    /// First industry keyword contained in the lowercased message
    pub fn extract_industry(&self, message: &str) -> Option<String> {
        let lower = message.to_lowercase();
        for keyword in INDUSTRY_KEYWORDS {
            if lower.contains(keyword) {
                return Some(keyword.to_string());
            }
        }
        None
    }
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let extractor = DetailExtractor::new();
        assert_eq!(
            extractor.extract_email("reach me at jane.doe@example.com please"),
            Some("jane.doe@example.com".to_string())
        );
        assert_eq!(extractor.extract_email("no address here"), None);
    }

    #[test]
    fn test_email_overwrite_semantics() {
        let extractor = DetailExtractor::new();
        let mut profile = SessionProfile::new();

        extractor.extract("my email is a@b.com", &mut profile);
        assert_eq!(profile.email.as_deref(), Some("a@b.com"));

        // A message with no email never clears the field
        extractor.extract("just checking in", &mut profile);
        assert_eq!(profile.email.as_deref(), Some("a@b.com"));

        // A later match overwrites
        extractor.extract("actually use c@d.org", &mut profile);
        assert_eq!(profile.email.as_deref(), Some("c@d.org"));
    }

    #[test]
    fn test_extract_phone_formats() {
        let extractor = DetailExtractor::new();
        assert_eq!(
            extractor.extract_phone("call me on 9876543210"),
            Some("9876543210".to_string())
        );
        assert_eq!(
            extractor.extract_phone("number is +91 9876543210"),
            Some("+91 9876543210".to_string())
        );
        assert_eq!(
            extractor.extract_phone("98765 43210 works"),
            Some("98765 43210".to_string())
        );
        assert_eq!(extractor.extract_phone("no digits"), None);
    }

    #[test]
    fn test_industry_first_match_wins() {
        let extractor = DetailExtractor::new();

        // Both "healthcare" and "startup" present; list order decides
        assert_eq!(
            extractor.extract_industry("We run a healthcare startup"),
            Some("healthcare".to_string())
        );
        assert_eq!(
            extractor.extract_industry("we are a SaaS startup"),
            Some("saas".to_string())
        );
        assert_eq!(extractor.extract_industry("purple elephant"), None);
    }

    #[test]
    fn test_uppercase_it_keyword_is_inert() {
        let extractor = DetailExtractor::new();
        // "it" appears everywhere in English; the literal "IT" entry must
        // not turn that into an industry match.
        assert_eq!(extractor.extract_industry("I quite like it here"), None);
        assert_eq!(extractor.extract_industry("we are an IT company"), None);
        assert_eq!(
            extractor.extract_industry("an IT and technology firm"),
            Some("technology".to_string())
        );
    }

    #[test]
    fn test_profile_untouched_without_matches() {
        let extractor = DetailExtractor::new();
        let mut profile = SessionProfile::new();
        extractor.extract("hello there", &mut profile);
        assert_eq!(profile, SessionProfile::default());
    }
}
