// file: src/models/resume_text.rs
// description: immutable extracted document text and its trimmed line view
// reference: internal data structures

use sha2::{Digest, Sha256};

/// Raw text of one resume plus its non-empty, trimmed lines in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    text: String,
    lines: Vec<String>,
}

impl ResumeText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { text, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Untrimmed lines including blanks; section scanning needs the blanks.
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
