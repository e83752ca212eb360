//! Plain text uploads.

use crate::ports::ExtractionError;

const UTF8_BOM: &str = "\u{feff}";

/// Decodes strict UTF-8, dropping a leading byte-order mark.
pub fn extract_plain(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ExtractionError::Encoding(e.to_string()))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_trims() {
        assert_eq!(extract_plain(b"  \nTerms apply.\n\n").unwrap(), "Terms apply.");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(extract_plain("\u{feff}Hello".as_bytes()).unwrap(), "Hello");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = extract_plain(&[0x66, 0x6f, 0xff, 0x6f]).unwrap_err();
        assert!(matches!(err, ExtractionError::Encoding(_)));
    }
}
