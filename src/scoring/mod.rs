// file: src/scoring/mod.rs
// description: scoring module exports
// reference: internal module structure

pub mod grammar;
pub mod quality;

pub use grammar::{GrammarChecker, GrammarIssue, LanguageToolChecker, grammar_score};
pub use quality::quality_score;
