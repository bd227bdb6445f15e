// file: src/scoring/grammar.rs
// description: grammar checking collaborator and grammar-error score
// reference: https://languagetool.org/http-api/

use crate::config::GrammarConfig;
use crate::error::{ResumeError, Result};
use crate::models::GrammarScore;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// One issue flagged by a grammar checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    pub rule_id: Option<String>,
}

pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>>;
}

/// `100 * max(0, words - errors) / max(1, words)`; empty text never divides by zero.
pub fn grammar_score(text: &str, issues: &[GrammarIssue]) -> GrammarScore {
    let word_count = text.split_whitespace().count();
    let errors = issues.len();
    let clean_words = word_count.saturating_sub(errors);
    let score = 100.0 * clean_words as f64 / word_count.max(1) as f64;

    GrammarScore {
        errors,
        word_count,
        score,
    }
}

/// Client for a LanguageTool-compatible `/v2/check` endpoint.
pub struct LanguageToolChecker {
    client: reqwest::blocking::Client,
    endpoint: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
struct CheckMatch {
    message: String,
    offset: usize,
    length: usize,
    rule: Option<CheckRule>,
}

#[derive(Debug, Deserialize)]
struct CheckRule {
    id: String,
}

impl LanguageToolChecker {
    pub fn new(config: &GrammarConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ResumeError::Grammar(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    pub fn check_url(&self) -> String {
        format!("{}/v2/check", self.endpoint)
    }

    /// Reachability check used by the health report.
    pub fn ping(&self) -> Result<()> {
        self.check("ok").map(|_| ())
    }
}

impl GrammarChecker for LanguageToolChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.check_url())
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .map_err(|e| ResumeError::Grammar(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResumeError::Grammar(format!(
                "Grammar service returned {}",
                status
            )));
        }

        let body: CheckResponse = response
            .json()
            .map_err(|e| ResumeError::Grammar(format!("Invalid response: {}", e)))?;

        debug!("Grammar service flagged {} issues", body.matches.len());

        Ok(body
            .matches
            .into_iter()
            .map(|m| GrammarIssue {
                message: m.message,
                offset: m.offset,
                length: m.length,
                rule_id: m.rule.map(|r| r.id),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(n: usize) -> Vec<GrammarIssue> {
        (0..n)
            .map(|i| GrammarIssue {
                message: "Possible typo".to_string(),
                offset: i,
                length: 1,
                rule_id: None,
            })
            .collect()
    }

    #[test]
    fn test_score_counts_clean_words() {
        let score = grammar_score("one two three four", &issues(1));
        assert_eq!(score.errors, 1);
        assert_eq!(score.word_count, 4);
        assert_eq!(score.score, 75.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let score = grammar_score("", &[]);
        assert_eq!(score.word_count, 0);
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_more_errors_than_words_floors_at_zero() {
        let score = grammar_score("bad text", &issues(5));
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_check_response_parsing() {
        let json = r#"{"software":{"name":"LanguageTool"},"matches":[
            {"message":"Possible spelling mistake","offset":3,"length":4,"rule":{"id":"MORFOLOGIK_RULE_EN_US"}},
            {"message":"Missing comma","offset":10,"length":1}
        ]}"#;
        let parsed: CheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.matches.len(), 2);
        assert_eq!(parsed.matches[0].rule.as_ref().unwrap().id, "MORFOLOGIK_RULE_EN_US");
        assert!(parsed.matches[1].rule.is_none());
    }

    #[test]
    fn test_check_url_trims_slash() {
        let config = GrammarConfig {
            enabled: true,
            endpoint: "http://localhost:8081/".to_string(),
            language: "en-US".to_string(),
            timeout_secs: 5,
        };
        let checker = LanguageToolChecker::new(&config).unwrap();
        assert_eq!(checker.check_url(), "http://localhost:8081/v2/check");
    }
}
