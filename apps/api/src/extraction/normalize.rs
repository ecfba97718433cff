//! Text Normalizer — turns raw file bytes into plain text.
//!
//! PDF and DOCX are handled locally; images carry no local OCR and are
//! transcribed by the vision-capable model call in `structured`.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Declared input type, parsed from the uploaded file's extension.
/// Unknown extensions fail fast, before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Jpeg,
    Png,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Result<Self, AppError> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "jpg" | "jpeg" => Ok(FileKind::Jpeg),
            "png" => Ok(FileKind::Png),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_filename(name: &str) -> Result<Self, AppError> {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Err(AppError::UnsupportedFormat(name.to_string())),
        }
    }

    /// MIME type used for the vision data URI.
    pub fn mime(self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FileKind::Jpeg => "image/jpeg",
            FileKind::Png => "image/png",
        }
    }
}

/// Extracts the text layer from a PDF, pages separated by newlines.
/// Encrypted or scanned-only PDFs have no usable text layer and are
/// rejected rather than auto-OCR'd.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::ExtractionService(format!("Failed to read PDF: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::ExtractionService(
            "PDF has no extractable text layer".to_string(),
        ));
    }
    Ok(text)
}

/// Extracts paragraph text from a DOCX, paragraphs separated by newlines.
/// Tables and headers are not traversed.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::ExtractionService(format!("Failed to read DOCX: {e}")))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            if !line.trim().is_empty() {
                paragraphs.push(line);
            }
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}
