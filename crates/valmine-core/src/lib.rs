//! Core library for property valuation report mining.
//!
//! This crate provides:
//! - PDF text acquisition with page-break markers
//! - Pattern-cascade field extraction over noisy, OCR-degraded report text
//! - Per-type normalizers (monetary values, dates, coordinates, areas)
//! - A fixed-schema record assembler with post-extraction diagnostics

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{PdfError, Result, ValmineError};
pub use extract::{field_report, RecordAssembler, RecordExtractor};
pub use models::config::ValmineConfig;
pub use models::record::{ExtractionRecord, SENTINEL};
pub use models::schema::{default_schema, ExtractionRule, FieldDescriptor, FieldSource};
pub use pdf::{PdfExtractor, PdfProcessor};
