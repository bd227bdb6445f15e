// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResumeError>;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Unsupported file type: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("Filename not provided and could not be derived from the input")]
    MissingFilename,

    #[error("Text extraction failed for {format} document: {message}")]
    TextExtraction { format: String, message: String },

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("Grammar check failed: {0}")]
    Grammar(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ResumeError {
    pub fn extraction(format: impl std::fmt::Display, message: impl Into<String>) -> Self {
        ResumeError::TextExtraction {
            format: format.to_string(),
            message: message.into(),
        }
    }

    /// True for failures caused by the input itself rather than a collaborator.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResumeError::UnsupportedFormat { .. } | ResumeError::MissingFilename
        )
    }
}

impl From<serde_json::Error> for ResumeError {
    fn from(err: serde_json::Error) -> Self {
        ResumeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = ResumeError::UnsupportedFormat {
            extension: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported file type: \"xyz\"");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_extraction_error_is_not_input_error() {
        let err = ResumeError::extraction("pdf", "corrupt xref table");
        assert!(err.to_string().contains("pdf"));
        assert!(!err.is_input_error());
    }
}
