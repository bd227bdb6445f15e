// file: src/models/score.rs
// description: composite quality score and grammar score models
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One criterion of the composite score and the points it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: String,
    pub points: i32,
}

impl ScoreComponent {
    pub fn new(criterion: &str, points: i32) -> Self {
        Self {
            criterion: criterion.to_string(),
            points,
        }
    }
}

/// Additive resume-quality score, clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    pub score: u8,
    pub raw_score: i32,
    pub breakdown: Vec<ScoreComponent>,
}

impl QualityScore {
    pub fn from_components(breakdown: Vec<ScoreComponent>) -> Self {
        let raw_score: i32 = breakdown.iter().map(|c| c.points).sum();
        let score = raw_score.clamp(0, 100) as u8;

        Self {
            score,
            raw_score,
            breakdown,
        }
    }
}

/// Share of words not flagged by the grammar checker, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarScore {
    pub errors: usize,
    pub word_count: usize,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_score_clamps_high() {
        let score = QualityScore::from_components(vec![
            ScoreComponent::new("a", 80),
            ScoreComponent::new("b", 40),
        ]);
        assert_eq!(score.score, 100);
        assert_eq!(score.raw_score, 120);
    }

    #[test]
    fn test_quality_score_clamps_low() {
        let score = QualityScore::from_components(vec![ScoreComponent::new("short", -10)]);
        assert_eq!(score.score, 0);
        assert_eq!(score.raw_score, -10);
    }
}
