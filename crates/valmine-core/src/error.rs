//! Error types for the valmine-core library.
//!
//! Field extraction itself never fails: an unresolvable field degrades to
//! the sentinel inside the record. Errors here cover the boundaries around
//! the engine - document acquisition, I/O, and configuration.

use thiserror::Error;

/// Main error type for the valmine library.
#[derive(Error, Debug)]
pub enum ValmineError {
    /// PDF acquisition error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF text acquisition.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the valmine library.
pub type Result<T> = std::result::Result<T, ValmineError>;
