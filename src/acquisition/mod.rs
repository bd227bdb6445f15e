// file: src/acquisition/mod.rs
// description: document to text conversion for pdf, word and image resumes
// reference: internal module structure

pub mod docx;
pub mod format;
pub mod ocr;
pub mod pdf;
pub mod scanner;

pub use format::{DocumentFormat, ResumeInput, SUPPORTED_EXTENSIONS};
pub use ocr::OcrEngine;
pub use scanner::{FileScanner, ScannedFile};

use crate::config::AcquisitionConfig;
use crate::error::{ResumeError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Converts raw document bytes into plain text.
pub trait TextSource: Send + Sync {
    fn extract_text(&self, data: &[u8], file_name: &str) -> Result<String>;
}

/// Default text source: pdf text layer (with OCR for blank pages), OOXML
/// paragraphs, and tesseract for images.
pub struct DocumentTextExtractor {
    ocr: OcrEngine,
    ocr_fallback: bool,
    max_bytes: u64,
}

impl DocumentTextExtractor {
    pub fn new(config: &AcquisitionConfig) -> Self {
        Self {
            ocr: OcrEngine::new(config),
            ocr_fallback: config.ocr_fallback,
            max_bytes: (config.max_file_size_mb as u64) * 1_048_576,
        }
    }
}

impl TextSource for DocumentTextExtractor {
    fn extract_text(&self, data: &[u8], file_name: &str) -> Result<String> {
        let format = DocumentFormat::from_filename(file_name)?;

        if self.max_bytes > 0 && data.len() as u64 > self.max_bytes {
            return Err(ResumeError::Validation(format!(
                "File too large ({} bytes): {}",
                data.len(),
                file_name
            )));
        }

        debug!("Extracting text from {} as {}", file_name, format);

        match format {
            DocumentFormat::Pdf => {
                let ocr = self.ocr_fallback.then_some(&self.ocr);
                pdf::extract_pdf_text(data, ocr)
            }
            DocumentFormat::Word => docx::extract_docx_text(data),
            DocumentFormat::Image => {
                let extension = Path::new(file_name)
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("png")
                    .to_lowercase();
                self.ocr.image_bytes_to_text(data, &extension)
            }
        }
    }
}

/// Reads the bytes behind a `ResumeInput`.
pub fn read_input(input: &ResumeInput) -> Result<Vec<u8>> {
    match input {
        ResumeInput::Path(path) => fs::read(path).map_err(|source| ResumeError::FileOperation {
            path: path.clone(),
            source,
        }),
        ResumeInput::Bytes { data, .. } => Ok(data.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn extractor() -> DocumentTextExtractor {
        DocumentTextExtractor::new(&Config::default_config().acquisition)
    }

    #[test]
    fn test_unsupported_extension_rejected_before_reading() {
        let result = extractor().extract_text(b"anything", "resume.xyz");
        assert!(matches!(result, Err(ResumeError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_docx_dispatch() {
        let data = docx::tests::build_docx(&["Jane Doe", "Python developer"]);
        let text = extractor().extract_text(&data, "jane.DOCX").unwrap();
        assert_eq!(text, "Jane Doe\nPython developer");
    }

    #[test]
    fn test_scanned_pdf_without_ocr_fallback_is_empty() {
        let mut config = Config::default_config().acquisition;
        config.ocr_fallback = false;
        config.pdftoppm_path = "/nonexistent/pdftoppm".to_string();
        let extractor = DocumentTextExtractor::new(&config);

        let text = extractor.extract_text(&pdf::tests::blank_page_pdf(), "scan.pdf").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_scanned_pdf_with_missing_renderer_is_ocr_error() {
        let mut config = Config::default_config().acquisition;
        config.pdftoppm_path = "/nonexistent/pdftoppm".to_string();
        let extractor = DocumentTextExtractor::new(&config);

        assert!(matches!(
            extractor.extract_text(&pdf::tests::blank_page_pdf(), "scan.pdf"),
            Err(ResumeError::Ocr(_))
        ));
    }

    #[test]
    fn test_size_limit() {
        let mut config = Config::default_config().acquisition;
        config.max_file_size_mb = 1;
        let extractor = DocumentTextExtractor::new(&config);
        let data = vec![0u8; 2 * 1_048_576];

        assert!(matches!(
            extractor.extract_text(&data, "big.pdf"),
            Err(ResumeError::Validation(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let input = ResumeInput::from_path("/nonexistent/cv.pdf");
        assert!(matches!(
            read_input(&input),
            Err(ResumeError::FileOperation { .. })
        ));
    }
}
