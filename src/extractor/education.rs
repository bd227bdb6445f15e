// file: src/extractor/education.rs
// description: degree line detection ordered by seniority
// reference: degree keyword ranking

use crate::config::ScanScope;
use crate::extractor::keywords::KeywordSet;
use crate::extractor::patterns::DEGREES;
use crate::extractor::sections::{candidate_lines, dedup_lines};
use crate::models::{Field, ResumeText};

pub struct EducationExtractor {
    scope: ScanScope,
}

impl EducationExtractor {
    pub fn new(scope: ScanScope) -> Self {
        Self { scope }
    }

    /// Unique degree lines, most senior first; equal ranks keep text order.
    pub fn extract(&self, text: &ResumeText) -> Field<Vec<String>> {
        let matching = candidate_lines(text, self.scope, "education")
            .into_iter()
            .filter(|line| DEGREES.is_match(line));

        Field::from_lines(rank_lines(dedup_lines(matching), &DEGREES))
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new(ScanScope::default())
    }
}

/// Stable sort by the lowest keyword rank present; unranked lines go last.
pub fn rank_lines(mut lines: Vec<String>, keywords: &KeywordSet) -> Vec<String> {
    lines.sort_by_cached_key(|line| keywords.best_rank(line).unwrap_or(usize::MAX));
    lines
}
