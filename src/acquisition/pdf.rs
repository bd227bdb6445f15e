// file: src/acquisition/pdf.rs
// description: PDF text layer extraction with per-page OCR fallback
// reference: https://docs.rs/pdf-extract

use crate::acquisition::DocumentFormat;
use crate::acquisition::ocr::OcrEngine;
use crate::error::{ResumeError, Result};
use std::fs;
use std::panic;
use tracing::{debug, info, warn};

/// Reads the text layer page by page. Pages with no text (scans) are
/// rendered and OCR'd when an engine is supplied.
pub fn extract_pdf_text(data: &[u8], ocr: Option<&OcrEngine>) -> Result<String> {
    let pages = read_text_layer(data)?;

    debug!("PDF text layer read: {} pages", pages.len());

    let blank_pages: Vec<usize> = pages
        .iter()
        .enumerate()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(idx, _)| idx)
        .collect();

    let Some(engine) = ocr.filter(|_| !blank_pages.is_empty()) else {
        return Ok(join_pages(pages));
    };

    info!(
        "{} of {} PDF pages have no text layer, falling back to OCR",
        blank_pages.len(),
        pages.len()
    );

    let dir = tempfile::tempdir()?;
    let pdf_path = dir.path().join("document.pdf");
    fs::write(&pdf_path, data)?;

    let mut pages = pages;
    for idx in blank_pages {
        match engine.pdf_page_to_text(&pdf_path, idx + 1) {
            Ok(text) => pages[idx] = text,
            Err(e) => {
                warn!("OCR failed for page {}: {}", idx + 1, e);
                return Err(e);
            }
        }
    }

    Ok(join_pages(pages))
}

/// pdf-extract panics on some malformed documents (e.g. a font operator with
/// no font resources), so a panic is turned into an extraction error.
fn read_text_layer(data: &[u8]) -> Result<Vec<String>> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(data)) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ResumeError::extraction(DocumentFormat::Pdf, e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            warn!("PDF reader panicked: {}", reason);
            Err(ResumeError::extraction(
                DocumentFormat::Pdf,
                format!("malformed document: {}", reason),
            ))
        }
    }
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .map(|page| page.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
