//! Text extraction from resume document formats

use crate::error::{AtsMatcherError, Result};
use crate::input::file_detector::FileType;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableChild, TableRowChild};

/// Extract plain text from raw document bytes of a declared format.
///
/// Fails with `UnsupportedFormat` for unrecognized formats and
/// `ExtractionFailed` for malformed binary content; callers are expected
/// to fall back to an empty profile rather than abort on the latter.
pub fn extract_from_bytes(bytes: &[u8], file_type: &FileType) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract_bytes(bytes),
        FileType::Docx => DocxExtractor.extract_bytes(bytes),
        FileType::Text => PlainTextExtractor.extract_bytes(bytes),
        FileType::Unknown => Err(AtsMatcherError::UnsupportedFormat(
            "Expected a PDF, DOCX, or plain text document".to_string(),
        )),
    }
}

pub trait TextExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AtsMatcherError::ExtractionFailed(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| {
            AtsMatcherError::ExtractionFailed(format!("Failed to parse DOCX: {}", e))
        })?;

        let mut parts: Vec<String> = Vec::new();

        for child in docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => {
                    let text = Self::paragraph_text(&p);
                    if !text.trim().is_empty() {
                        parts.push(text);
                    }
                }
                DocumentChild::Table(t) => {
                    for row in &t.rows {
                        let TableChild::TableRow(r) = row;
                        for cell in &r.cells {
                            let TableRowChild::TableCell(c) = cell;
                            for content in &c.children {
                                if let docx_rs::TableCellContent::Paragraph(p) = content {
                                    let text = Self::paragraph_text(p);
                                    if !text.trim().is_empty() {
                                        parts.push(text);
                                    }
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(parts.join("\n"))
    }
}

impl DocxExtractor {
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            if let ParagraphChild::Run(r) = child {
                for run_child in &r.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
        }

        text
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
