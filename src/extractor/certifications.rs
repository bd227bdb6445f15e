// file: src/extractor/certifications.rs
// description: certification and training line detection
// reference: keyword line classification

use crate::config::ScanScope;
use crate::extractor::patterns::{CERTIFICATIONS, DEGREES};
use crate::extractor::sections::{candidate_lines, dedup_lines};
use crate::models::{Field, ResumeText};

pub struct CertificationExtractor {
    scope: ScanScope,
}

impl CertificationExtractor {
    pub fn new(scope: ScanScope) -> Self {
        Self { scope }
    }

    /// Certification lines in document order. Lines carrying a degree keyword
    /// belong to education and are never reported here. Under section scope
    /// the heading already marks the lines, so no keyword is required.
    pub fn extract(&self, text: &ResumeText) -> Field<Vec<String>> {
        let scope = self.scope;
        let matching = candidate_lines(text, scope, "certificat")
            .into_iter()
            .filter(|line| scope == ScanScope::Section || CERTIFICATIONS.is_match(line))
            .filter(|line| !DEGREES.is_match(line));

        Field::from_lines(dedup_lines(matching))
    }
}

impl Default for CertificationExtractor {
    fn default() -> Self {
        Self::new(ScanScope::default())
    }
}
