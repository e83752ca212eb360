//! Text Extraction Adapters.
//!
//! `DocumentTextExtractor` implements the `TextExtractor` port for every
//! supported format, enforcing the upload size limit before parsing.

mod docx;
mod pdf;
mod plain;

pub use docx::extract_docx;
pub use pdf::extract_pdf;
pub use plain::extract_plain;

use tracing::debug;

use crate::ports::{DocumentFormat, ExtractionError, TextExtractor};

/// Default upload limit: 10 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// How far a DOCX body may inflate relative to the upload limit.
pub const DOCX_INFLATION_FACTOR: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct DocumentTextExtractor {
    max_bytes: usize,
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_BYTES)
    }
}

impl DocumentTextExtractor {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    fn max_docx_xml_bytes(&self) -> usize {
        self.max_bytes.saturating_mul(DOCX_INFLATION_FACTOR)
    }
}

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
        if bytes.len() > self.max_bytes {
            return Err(ExtractionError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let text = match format {
            DocumentFormat::Txt => extract_plain(bytes)?,
            DocumentFormat::Pdf => extract_pdf(bytes)?,
            DocumentFormat::Docx => extract_docx(bytes, self.max_docx_xml_bytes())?,
        };

        debug!(
            %format,
            bytes = bytes.len(),
            chars = text.chars().count(),
            "text extracted"
        );

        Ok(text)
    }
}
