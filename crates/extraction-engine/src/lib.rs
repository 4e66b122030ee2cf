//! Document text extraction and clause segmentation
//!
//! Three cooperating stages, each a pure function over its input:
//!
//! - extraction: PDF/DOCX bytes -> plain text plus basic metrics
//! - structure parsing: text -> ordered clause sequence with offsets
//! - type detection: text -> coarse contract category
//!
//! Extraction runs under a hard wall-clock budget because the underlying
//! parsers can block without yielding; see [`timeout`]. The engine consumes
//! no environment and persists nothing; callers own storage and any
//! downstream analysis.

pub mod classify;
pub mod docx;
pub mod error;
pub mod ocr;
pub mod pdf;
pub mod structure;
pub mod timeout;

pub use classify::detect_contract_type;
pub use docx::extract_docx;
pub use error::ExtractError;
pub use ocr::{NoOcr, OcrEngine};
pub use pdf::extract_pdf;
pub use structure::parse_structure;
pub use timeout::{run_with_deadline, TEXT_EXTRACTION_TIMEOUT_MS};

use shared_types::ProcessedDocument;

/// MIME type accepted for PDF uploads
pub const MIME_PDF: &str = "application/pdf";
/// MIME type accepted for DOCX uploads
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extract text from a document buffer, dispatching on MIME type
///
/// The format parser runs on a blocking task raced against
/// [`TEXT_EXTRACTION_TIMEOUT_MS`]; a parse that outlives the budget is
/// abandoned and surfaced as [`ExtractError::Timeout`].
pub async fn extract_text(
    buffer: Vec<u8>,
    mime_type: &str,
) -> Result<ProcessedDocument, ExtractError> {
    extract_text_with_deadline(buffer, mime_type, TEXT_EXTRACTION_TIMEOUT_MS).await
}

/// [`extract_text`] with an explicit budget, for callers on tighter
/// deadlines and for tests
pub async fn extract_text_with_deadline(
    buffer: Vec<u8>,
    mime_type: &str,
    budget_ms: u64,
) -> Result<ProcessedDocument, ExtractError> {
    match mime_type {
        MIME_PDF => run_with_deadline(budget_ms, move || pdf::extract_pdf(&buffer)).await?,
        MIME_DOCX => run_with_deadline(budget_ms, move || docx::extract_docx(&buffer)).await?,
        other => Err(ExtractError::UnsupportedFileType(other.to_string())),
    }
}

/// Whitespace-delimited non-empty token count
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
