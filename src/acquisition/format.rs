// file: src/acquisition/format.rs
// description: input description, filename resolution and format detection
// reference: extension-based file type dispatch

use crate::error::{ResumeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["pdf", "docx", "doc", "png", "jpg", "jpeg", "tiff", "tif", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Image,
}

impl DocumentFormat {
    pub fn from_filename(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Word),
            "png" | "jpg" | "jpeg" | "tiff" | "tif" | "bmp" => Ok(DocumentFormat::Image),
            _ => Err(ResumeError::UnsupportedFormat { extension }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Word => "word",
            DocumentFormat::Image => "image",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resume handed to the pipeline: a file on disk or an in-memory upload.
#[derive(Debug, Clone)]
pub enum ResumeInput {
    Path(PathBuf),
    Bytes { data: Vec<u8>, name: Option<String> },
}

impl ResumeInput {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ResumeInput::Path(path.into())
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>, name: Option<&str>) -> Self {
        ResumeInput::Bytes {
            data: data.into(),
            name: name.map(str::to_string),
        }
    }

    /// Base name of the document: the explicit name wins, then the input's
    /// own path or upload name.
    pub fn resolve_filename(&self, explicit: Option<&str>) -> Result<String> {
        let candidate = match (explicit, self) {
            (Some(name), _) => Some(name.to_string()),
            (None, ResumeInput::Path(path)) => Some(path.to_string_lossy().to_string()),
            (None, ResumeInput::Bytes { name, .. }) => name.clone(),
        };

        candidate
            .as_deref()
            .and_then(base_name)
            .ok_or(ResumeError::MissingFilename)
    }
}

fn base_name(name: &str) -> Option<String> {
    let name = name.trim();
    // Uploads from Windows clients can carry backslash paths.
    let last = name.rsplit(['/', '\\']).next().unwrap_or(name);
    if last.is_empty() {
        None
    } else {
        Some(last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        assert_eq!(DocumentFormat::from_filename("cv.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("cv.docx").unwrap(), DocumentFormat::Word);
        assert_eq!(DocumentFormat::from_filename("cv.doc").unwrap(), DocumentFormat::Word);
        assert_eq!(DocumentFormat::from_filename("scan.jpeg").unwrap(), DocumentFormat::Image);
        assert_eq!(DocumentFormat::from_filename("scan.tiff").unwrap(), DocumentFormat::Image);
        assert_eq!(DocumentFormat::from_filename("scan.bmp").unwrap(), DocumentFormat::Image);
    }

    #[test]
    fn test_unsupported_extension() {
        match DocumentFormat::from_filename("resume.xyz") {
            Err(ResumeError::UnsupportedFormat { extension }) => assert_eq!(extension, "xyz"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            DocumentFormat::from_filename("README"),
            Err(ResumeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_every_listed_extension_is_supported() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(DocumentFormat::from_filename(&format!("a.{}", ext)).is_ok());
        }
    }

    #[test]
    fn test_resolve_filename_precedence() {
        let input = ResumeInput::from_path("/uploads/2024/jane.pdf");
        assert_eq!(input.resolve_filename(None).unwrap(), "jane.pdf");
        assert_eq!(input.resolve_filename(Some("other.docx")).unwrap(), "other.docx");

        let upload = ResumeInput::from_bytes(vec![1, 2, 3], Some("C:\\Users\\jane\\cv.docx"));
        assert_eq!(upload.resolve_filename(None).unwrap(), "cv.docx");
    }

    #[test]
    fn test_missing_filename() {
        let upload = ResumeInput::from_bytes(vec![1, 2, 3], None);
        assert!(matches!(
            upload.resolve_filename(None),
            Err(ResumeError::MissingFilename)
        ));
        assert!(matches!(
            upload.resolve_filename(Some("dir/")),
            Err(ResumeError::MissingFilename)
        ));
    }
}
