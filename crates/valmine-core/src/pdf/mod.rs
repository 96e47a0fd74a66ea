//! PDF text acquisition.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text acquisition implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract text from the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Extract text with `marker` inserted between pages.
    fn extract_text_with_markers(&self, marker: &str) -> Result<String>;
}
