// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod field;
pub mod fields;
pub mod report;
pub mod resume_text;
pub mod score;

pub use field::{Field, NOT_FOUND};
pub use fields::ExtractedFields;
pub use report::{CareerRecommendation, FALLBACK_CAREER, ResumeReport};
pub use resume_text::ResumeText;
pub use score::{GrammarScore, QualityScore, ScoreComponent};
