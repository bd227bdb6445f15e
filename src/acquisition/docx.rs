// file: src/acquisition/docx.rs
// description: paragraph text extraction from OOXML word documents
// reference: https://docs.rs/quick-xml

use crate::acquisition::DocumentFormat;
use crate::error::{ResumeError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

/// One output line per `<w:p>` paragraph, in document order.
pub fn extract_docx_text(data: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ResumeError::extraction(DocumentFormat::Word, format!("not an OOXML package: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ResumeError::extraction(DocumentFormat::Word, format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)?;

    paragraphs_from_xml(&xml).map(|paragraphs| paragraphs.join("\n"))
}

fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ResumeError::extraction(DocumentFormat::Word, e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ResumeError::extraction(
                    DocumentFormat::Word,
                    format!("malformed XML at {}: {}", reader.buffer_position(), e),
                ));
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}
