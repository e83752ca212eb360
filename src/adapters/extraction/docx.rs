//! DOCX uploads: text runs from `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::ports::{DocumentFormat, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

fn malformed(reason: impl Into<String>) -> ExtractionError {
    ExtractionError::malformed(DocumentFormat::Docx, reason)
}

/// Collects `w:t` runs, one line per paragraph. Tabs and line breaks
/// inside a paragraph are kept. Paragraphs nested in text boxes are emitted
/// on their own lines after the paragraph that anchors them.
///
/// At most `max_xml_bytes` of `word/document.xml` are inflated.
pub fn extract_docx(bytes: &[u8], max_xml_bytes: usize) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| malformed(format!("not a ZIP archive: {}", e)))?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| malformed(format!("missing {}", DOCUMENT_PART)))?;

    let mut xml = String::new();
    part.take(max_xml_bytes as u64 + 1)
        .read_to_string(&mut xml)
        .map_err(|e| malformed(format!("unreadable {}: {}", DOCUMENT_PART, e)))?;

    if xml.len() > max_xml_bytes {
        return Err(malformed(format!(
            "{} inflates past {} bytes",
            DOCUMENT_PART, max_xml_bytes
        )));
    }

    paragraphs_from_xml(&xml)
}

fn paragraphs_from_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut output = String::new();
    // Innermost paragraph last.
    let mut open: Vec<String> = Vec::new();
    // Closed nested paragraphs waiting for their outermost paragraph.
    let mut nested: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                let Some(paragraph) = open.last_mut() else {
                    continue;
                };
                match e.local_name().as_ref() {
                    b"tab" => paragraph.push('\t'),
                    b"br" | b"cr" => paragraph.push('\n'),
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    let Some(paragraph) = open.pop() else {
                        continue;
                    };
                    if open.is_empty() {
                        output.push_str(&paragraph);
                        output.push('\n');
                        for inner in nested.drain(..) {
                            output.push_str(&inner);
                            output.push('\n');
                        }
                    } else {
                        nested.push(paragraph);
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|err| malformed(format!("bad text run: {}", err)))?;
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(format!("XML parse error: {}", e))),
            _ => {}
        }
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Section 1.</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve"> Fees are non-refundable.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Disputes &amp; claims go to binding arbitration.</w:t></w:r></w:p>
    <w:p/>
  </w:body>
</w:document>"#;

    const LIMIT: usize = 1024 * 1024;

    fn docx_with(part: &str, xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file(part, options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn extracts_paragraph_text() {
        let text = extract_docx(&docx_with(DOCUMENT_PART, BODY), LIMIT).unwrap();
        assert_eq!(
            text,
            "Section 1.\t Fees are non-refundable.\nDisputes & claims go to binding arbitration."
        );
    }

    #[test]
    fn missing_document_part_is_malformed() {
        let err = extract_docx(&docx_with("word/other.xml", BODY), LIMIT).unwrap_err();
        assert_eq!(err, malformed("missing word/document.xml"));
    }

    #[test]
    fn non_zip_bytes_are_malformed() {
        let err = extract_docx(b"plain text, not a zip", LIMIT).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Malformed {
                format: DocumentFormat::Docx,
                ..
            }
        ));
    }

    #[test]
    fn text_box_paragraph_keeps_anchor_text() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>The Seller shall indemnify the Buyer.</w:t></w:r><w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></w:pict></w:r><w:r><w:t xml:space="preserve"> Tail.</w:t></w:r></w:p>
<w:p><w:r><w:t>Next.</w:t></w:r></w:p>
</w:body></w:document>"#;

        let text = extract_docx(&docx_with(DOCUMENT_PART, xml), LIMIT).unwrap();

        assert_eq!(text, "The Seller shall indemnify the Buyer. Tail.\nBox\nNext.");
    }

    #[test]
    fn oversized_document_part_is_rejected() {
        let bytes = docx_with(DOCUMENT_PART, BODY);

        let err = extract_docx(&bytes, 64).unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::Malformed { ref reason, .. } if reason.contains("inflates past 64 bytes")
        ));
    }
}
