//! OCR extension point for scanned documents
//!
//! Scanned-page recovery is out of scope for this engine. The seam exists
//! so a real backend can be plugged in later; the shipped implementation
//! fails loudly instead of silently returning blank text.

use crate::error::ExtractError;

/// Converts a page image into text
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, ExtractError>;
}

/// Shipped default: OCR disabled
pub struct NoOcr;

impl OcrEngine for NoOcr {
    fn recognize(&self, _image: &[u8]) -> Result<String, ExtractError> {
        Err(ExtractError::OcrUnsupported(
            "scanned-page OCR is not available; upload a native PDF or DOCX".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_never_returns_blank_text() {
        let result = NoOcr.recognize(b"\x89PNG fake image bytes");
        assert!(matches!(result, Err(ExtractError::OcrUnsupported(_))));
    }
}
