// file: src/extractor/name.rs
// description: candidate name detection from the document heading
// reference: heading-aware name heuristics

use crate::extractor::patterns::TITLE_MARKER;
use crate::models::{Field, ResumeText};

/// Takes the first non-empty line as the name, or the line after it when the
/// first line is a "CV"/"Resume" title.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &ResumeText) -> Field<String> {
        let mut lines = text.lines().iter();

        let Some(first) = lines.next() else {
            return Field::NotFound;
        };

        let candidate = if TITLE_MARKER.is_match(first) {
            match lines.next() {
                Some(next) => next,
                None => return Field::NotFound,
            }
        } else {
            first
        };

        Field::Found(title_case(candidate))
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, so "JOHN o'neil" becomes "John O'Neil".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
