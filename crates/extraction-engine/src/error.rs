use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to extract text from PDF: {0}")]
    PdfParse(String),

    #[error("Failed to extract text from DOCX: {0}")]
    DocxParse(String),

    #[error("Text extraction timed out after {0}ms")]
    Timeout(u64),

    #[error("OCR is not available: {0}")]
    OcrUnsupported(String),

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}
