// file: src/models/report.rs
// description: final per-resume result record assembled by the pipeline
// reference: internal data structures

use crate::models::{ExtractedFields, GrammarScore, QualityScore};
use serde::{Deserialize, Serialize};

pub const FALLBACK_CAREER: &str = "General Role Based on Resume";

/// Careers suggested for a skill set. `fallback` marks the placeholder
/// answer given when no skill matched the career table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub careers: Vec<String>,
    pub fallback: bool,
}

impl CareerRecommendation {
    pub fn matched(careers: Vec<String>) -> Self {
        if careers.is_empty() {
            return Self::general();
        }
        Self {
            careers,
            fallback: false,
        }
    }

    pub fn general() -> Self {
        Self {
            careers: vec![FALLBACK_CAREER.to_string()],
            fallback: true,
        }
    }
}

/// Output of one `parse_resume` call. Holds no timestamps, so the same
/// input always produces the same report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub file_name: String,
    pub content_hash: String,
    pub word_count: usize,
    #[serde(flatten)]
    pub fields: ExtractedFields,
    pub score: u8,
    pub quality: QualityScore,
    pub grammar: Option<GrammarScore>,
    pub recommendations: CareerRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_match_falls_back() {
        let rec = CareerRecommendation::matched(vec![]);
        assert!(rec.fallback);
        assert_eq!(rec.careers, vec![FALLBACK_CAREER.to_string()]);
    }

    #[test]
    fn test_matched_careers() {
        let rec = CareerRecommendation::matched(vec!["Data Analyst".to_string()]);
        assert!(!rec.fallback);
        assert_eq!(rec.careers.len(), 1);
    }
}
