// file: src/scoring/quality.rs
// description: additive resume quality score
// reference: weighted completeness scoring

use crate::extractor::patterns::{SECTION_HEADERS, SOFT_SKILLS};
use crate::models::{ExtractedFields, QualityScore, ResumeText, ScoreComponent};

const CONTACT_POINTS: i32 = 10;
const POINTS_PER_SKILL: i32 = 5;
const MAX_SCORED_SKILLS: usize = 6;
const SECTION_POINTS: i32 = 10;
const SOFT_SKILL_POINTS: i32 = 10;
const LENGTH_POINTS: i32 = 10;
const SHORT_PENALTY: i32 = -10;
const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 500..=1500;
const SHORT_WORDS: usize = 100;

/// Scores a resume from its extracted fields and raw text. Fields that were
/// not found contribute nothing.
pub fn quality_score(fields: &ExtractedFields, text: &ResumeText) -> QualityScore {
    let word_count = text.word_count();
    let mut breakdown = Vec::new();

    if fields.email.is_found() {
        breakdown.push(ScoreComponent::new("email", CONTACT_POINTS));
    }
    if fields.phone.is_found() {
        breakdown.push(ScoreComponent::new("phone", CONTACT_POINTS));
    }
    if !fields.skills.is_empty() {
        let counted = fields.skills.len().min(MAX_SCORED_SKILLS) as i32;
        breakdown.push(ScoreComponent::new("skills", counted * POINTS_PER_SKILL));
    }
    if fields.education.is_found() {
        breakdown.push(ScoreComponent::new("education", SECTION_POINTS));
    }
    if fields.experience.is_found() {
        breakdown.push(ScoreComponent::new("experience", SECTION_POINTS));
    }
    if SOFT_SKILLS.is_match(text.text()) {
        breakdown.push(ScoreComponent::new("soft_skills", SOFT_SKILL_POINTS));
    }
    if IDEAL_WORDS.contains(&word_count) {
        breakdown.push(ScoreComponent::new("length", LENGTH_POINTS));
    }
    if SECTION_HEADERS.is_match(text.text()) {
        breakdown.push(ScoreComponent::new("section_headers", SECTION_POINTS));
    }
    if word_count < SHORT_WORDS {
        breakdown.push(ScoreComponent::new("too_short", SHORT_PENALTY));
    }

    QualityScore::from_components(breakdown)
}
