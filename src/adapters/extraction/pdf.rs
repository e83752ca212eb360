//! PDF uploads via `pdf-extract`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::ports::{DocumentFormat, ExtractionError};

/// Extracts the text layer of a PDF.
///
/// `pdf-extract` can panic on corrupt input instead of returning an error,
/// so the call is isolated and a panic is reported as a malformed document.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !bytes.starts_with(b"%PDF") {
        return Err(ExtractionError::malformed(
            DocumentFormat::Pdf,
            "missing %PDF header",
        ));
    }

    let extracted = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|_| ExtractionError::malformed(DocumentFormat::Pdf, "parser aborted on corrupt input"))?;

    let text = extracted.map_err(|e| ExtractionError::malformed(DocumentFormat::Pdf, e.to_string()))?;
    Ok(text.trim().to_string())
}
