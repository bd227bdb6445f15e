// file: src/extractor/contact.rs
// description: email address and phone number extraction
// reference: contact pattern matching

use crate::extractor::patterns::{EMAIL, PHONE};
use crate::models::{Field, ResumeText};

pub struct ContactExtractor;

impl ContactExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First email-shaped substring; no further validation.
    pub fn email(&self, text: &ResumeText) -> Field<String> {
        EMAIL
            .find(text.text())
            .map(|m| m.as_str().to_string())
            .into()
    }

    /// First phone-shaped substring, trimmed of trailing separators.
    pub fn phone(&self, text: &ResumeText) -> Field<String> {
        PHONE
            .find(text.text())
            .map(|m| m.as_str().trim().to_string())
            .into()
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_wins() {
        let text = ResumeText::new("Contact: john@example.com, alt: j.doe+cv@mail.co.uk");
        assert_eq!(
            ContactExtractor::new().email(&text),
            Field::Found("john@example.com".to_string())
        );
    }

    #[test]
    fn test_international_phone() {
        let text = ResumeText::new("John\nPhone: +14155552671\nEmail: john@example.com");
        assert_eq!(
            ContactExtractor::new().phone(&text),
            Field::Found("+14155552671".to_string())
        );
    }

    #[test]
    fn test_missing_contact() {
        let text = ResumeText::new("Jane Doe\nNo contact details here");
        let extractor = ContactExtractor::new();
        assert_eq!(extractor.email(&text), Field::NotFound);
        assert_eq!(extractor.phone(&text), Field::NotFound);
    }
}
