//! DOCX text extraction
//!
//! A DOCX file is a ZIP container whose body lives in `word/document.xml`.
//! Text is collected from `w:t` runs, with paragraph ends and explicit
//! breaks mapped to newlines. Formatting is discarded.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use shared_types::ProcessedDocument;
use tracing::debug;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Extract text and metrics from a DOCX byte buffer
///
/// `page_count` is never reported (the format has no fixed pagination at
/// this layer) and `has_scanned_pages` is always false: DOCX is native text.
pub fn extract_docx(buffer: &[u8]) -> Result<ProcessedDocument, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(buffer))
        .map_err(|e| ExtractError::DocxParse(format!("not a DOCX container: {}", e)))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::DocxParse(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::DocxParse(e.to_string()))?;

    let text = text_from_document_xml(&document_xml)?;
    let word_count = crate::count_words(&text);

    debug!(words = word_count, chars = text.len(), "docx extraction complete");

    Ok(ProcessedDocument {
        text,
        page_count: None,
        word_count,
        has_scanned_pages: false,
        metadata: None,
    })
}

/// Walk the WordprocessingML event stream and collect visible text
fn text_from_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                // Paragraph boundary
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractError::DocxParse(err.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::DocxParse(format!(
                    "malformed document.xml: {}",
                    e
                )))
            }
            Ok(_) => {}
        }
    }

    Ok(text)
}
