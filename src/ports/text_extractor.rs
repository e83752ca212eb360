//! Text Extractor Port - Plain text from uploaded documents.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
        }
    }

    /// Detects the format from a file name's extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            Some("txt") => Ok(DocumentFormat::Txt),
            _ => Err(ExtractionError::unsupported(file_name)),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Extraction failures. All of them are fatal to the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("unsupported file type '{file_name}': allowed types are .pdf, .docx, .txt")]
    UnsupportedFormat { file_name: String },

    #[error("file too large: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("malformed {format} document: {reason}")]
    Malformed { format: DocumentFormat, reason: String },

    #[error("text is not valid UTF-8: {0}")]
    Encoding(String),
}

impl ExtractionError {
    pub fn unsupported(file_name: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            file_name: file_name.into(),
        }
    }

    pub fn malformed(format: DocumentFormat, reason: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            reason: reason.into(),
        }
    }
}

/// Port for turning document bytes into plain text.
///
/// Implementations return trimmed text and enforce their own size limit.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions_case_insensitively() {
        assert_eq!(DocumentFormat::from_file_name("lease.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_file_name("NDA.DOCX").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_file_name("terms.v2.Txt").unwrap(), DocumentFormat::Txt);
    }

    #[test]
    fn rejects_unknown_or_missing_extensions() {
        for name in ["contract.doc", "contract.rtf", "contract", ".pdf", ""] {
            let err = DocumentFormat::from_file_name(name).unwrap_err();
            assert!(
                matches!(err, ExtractionError::UnsupportedFormat { .. }),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            ExtractionError::TooLarge { size: 11, limit: 10 }.to_string(),
            "file too large: 11 bytes exceeds the 10 byte limit"
        );
        assert_eq!(
            ExtractionError::malformed(DocumentFormat::Docx, "missing body").to_string(),
            "malformed docx document: missing body"
        );
    }
}
