// file: src/acquisition/ocr.rs
// description: tesseract / pdftoppm command line OCR
// reference: https://tesseract-ocr.github.io/tessdoc/Command-Line-Usage.html

use crate::config::AcquisitionConfig;
use crate::error::{ResumeError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct OcrEngine {
    tesseract_path: String,
    pdftoppm_path: String,
    language: String,
    dpi: u32,
}

impl OcrEngine {
    pub fn new(config: &AcquisitionConfig) -> Self {
        Self {
            tesseract_path: config.tesseract_path.clone(),
            pdftoppm_path: config.pdftoppm_path.clone(),
            language: config.ocr_language.clone(),
            dpi: config.ocr_dpi,
        }
    }

    pub fn tesseract_available(&self) -> bool {
        Command::new(&self.tesseract_path)
            .arg("--version")
            .output()
            .is_ok()
    }

    pub fn pdftoppm_available(&self) -> bool {
        Command::new(&self.pdftoppm_path).arg("-v").output().is_ok()
    }

    pub fn image_file_to_text(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.tesseract_path)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| ResumeError::Ocr(format!("Failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResumeError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// OCR for an in-memory image; the extension tells tesseract the codec.
    pub fn image_bytes_to_text(&self, data: &[u8], extension: &str) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let image = dir.path().join(format!("upload.{}", extension));
        fs::write(&image, data)?;
        self.image_file_to_text(&image)
    }

    /// Renders one 1-based page of a PDF and OCRs it.
    pub fn pdf_page_to_text(&self, pdf: &Path, page: usize) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let prefix = dir.path().join("page");
        let page_arg = page.to_string();

        let output = Command::new(&self.pdftoppm_path)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(&page_arg)
            .arg("-l")
            .arg(&page_arg)
            .arg(pdf)
            .arg(&prefix)
            .output()
            .map_err(|e| ResumeError::Ocr(format!("Failed to run pdftoppm: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResumeError::Ocr(format!("pdftoppm failed: {}", stderr.trim())));
        }

        // pdftoppm pads the page number in the file name, so pick up whatever it wrote.
        let mut images: Vec<_> = fs::read_dir(dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();
        images.sort();

        let Some(image) = images.first() else {
            warn!("pdftoppm produced no image for page {}", page);
            return Ok(String::new());
        };

        debug!("OCR of rendered page {}", page);
        self.image_file_to_text(image)
    }
}
