// file: src/extractor/experience.rs
// description: work experience line detection
// reference: keyword line classification

use crate::config::ScanScope;
use crate::extractor::patterns::EXPERIENCE;
use crate::extractor::sections::{candidate_lines, dedup_lines};
use crate::models::{Field, ResumeText};

pub struct ExperienceExtractor {
    scope: ScanScope,
    word_limit: Option<usize>,
}

impl ExperienceExtractor {
    pub fn new(scope: ScanScope, word_limit: Option<usize>) -> Self {
        Self { scope, word_limit }
    }

    /// Experience lines in document order, each cut to `word_limit` words.
    pub fn extract(&self, text: &ResumeText) -> Field<Vec<String>> {
        let scope = self.scope;
        let matching = candidate_lines(text, scope, "experience")
            .into_iter()
            .filter(|line| scope == ScanScope::Section || EXPERIENCE.is_match(line));

        // Dedup runs on the truncated form.
        let truncated: Vec<String> = matching.map(|line| self.truncate(line)).collect();
        let lines = dedup_lines(truncated.iter().map(String::as_str));

        Field::from_lines(lines)
    }

    fn truncate(&self, line: &str) -> String {
        match self.word_limit {
            Some(limit) => line.split_whitespace().take(limit).collect::<Vec<_>>().join(" "),
            None => line.to_string(),
        }
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new(ScanScope::default(), Some(8))
    }
}
