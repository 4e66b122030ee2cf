//! PDF text extraction
//!
//! Uses lopdf for the page tree and Info dictionary, pdf-extract for the
//! text layer. Scanned-page detection is a word-density heuristic; pages
//! averaging fewer than 50 words are presumed to be image-only.

use std::collections::BTreeMap;

use lopdf::{Document, Object};
use pdf_extract::extract_text_from_mem;
use shared_types::ProcessedDocument;
use tracing::debug;

use crate::error::ExtractError;

/// Pages averaging fewer words than this are presumed scanned
const SCANNED_PAGE_WORD_THRESHOLD: f64 = 50.0;

/// Extract text and metrics from a PDF byte buffer
pub fn extract_pdf(buffer: &[u8]) -> Result<ProcessedDocument, ExtractError> {
    let doc = Document::load_mem(buffer).map_err(|e| ExtractError::PdfParse(e.to_string()))?;
    let page_count = doc.get_pages().len() as u32;
    let metadata = info_dictionary(&doc);

    let text =
        extract_text_from_mem(buffer).map_err(|e| ExtractError::PdfParse(e.to_string()))?;
    let word_count = crate::count_words(&text);
    let has_scanned_pages = scanned_pages_heuristic(word_count, page_count);

    debug!(
        pages = page_count,
        words = word_count,
        scanned = has_scanned_pages,
        "pdf extraction complete"
    );

    Ok(ProcessedDocument {
        text,
        page_count: Some(page_count),
        word_count,
        has_scanned_pages,
        metadata,
    })
}

/// True when the average words-per-page falls below the scan threshold
fn scanned_pages_heuristic(word_count: usize, page_count: u32) -> bool {
    if page_count == 0 {
        return false;
    }
    (word_count as f64 / page_count as f64) < SCANNED_PAGE_WORD_THRESHOLD
}

/// Render the trailer Info dictionary as opaque string metadata
fn info_dictionary(doc: &Document) -> Option<BTreeMap<String, String>> {
    let info = doc.trailer.get(b"Info").ok()?;
    let dict = match info {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };

    let mut metadata = BTreeMap::new();
    for (key, value) in dict.iter() {
        let key = String::from_utf8_lossy(key).into_owned();
        let rendered = match value {
            Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
            Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
            Object::Integer(n) => n.to_string(),
            Object::Real(r) => r.to_string(),
            Object::Boolean(b) => b.to_string(),
            _ => continue,
        };
        metadata.insert(key, rendered);
    }

    if metadata.is_empty() {
        None
    } else {
        Some(metadata)
    }
}
