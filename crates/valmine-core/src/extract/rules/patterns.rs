//! Common regex patterns shared by the rule modules.
//!
//! Field cascades are configuration data and compile at resolution time;
//! the constants here are the fixed patterns behind the normalizers and
//! the signature-block scan.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency tokens (Kenyan shilling spellings)
    pub static ref CURRENCY_TOKEN: Regex = Regex::new(
        r"(?i)k\.?\s*shs?\.?|\bkes\b"
    ).unwrap();

    // OCR renders the shilling suffix "/=" with stray spacing
    pub static ref SLASH_EQUALS: Regex = Regex::new(
        r"/\s*="
    ).unwrap();

    // Ordinal suffix directly after a day number
    pub static ref ORDINAL_AFTER_DIGIT: Regex = Regex::new(
        r"(?i)(\d)(?:st|nd|rd|th)\b"
    ).unwrap();

    // Date shapes, in the order the fuzzy search tries them.
    // Textual day-month-year tolerates garbled ordinal suffixes
    // ("17% April 2025", "17º April 2025").
    pub static ref DATE_NUMERIC_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_TEXTUAL_DMY: Regex = Regex::new(
        r"(?i)\b(\d{1,2}\s*(?:st|nd|rd|th|%|º|o)?\s*[,\s\-/.]?\s*[A-Za-z]{3,9}\s*[,\s\-/.]?\s*\d{4})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_TEXTUAL_MDY: Regex = Regex::new(
        r"(?i)\b([A-Za-z]{3,9}\s*\d{1,2}[,\s\-/.]?\s*\d{4})\b"
    ).unwrap();

    // Any date-shaped token inside a signature window line
    pub static ref SIGNATURE_DATE_TOKEN: Regex = Regex::new(
        r"(?i)\b\d{1,2}\s*(?:st|nd|rd|th|%|º)?\s*[A-Za-z]{3,9},?\s*\d{4}\b|\b\d{1,2}[./\-]\d{1,2}[./\-]\d{2,4}\b|\b\d{4}[/\-]\d{1,2}[/\-]\d{1,2}\b"
    ).unwrap();

    // A line holding nothing but a "Date" label
    pub static ref DATE_LABEL_LINE: Regex = Regex::new(
        r"(?i)^\s*date\s*[:.\-]?\s*$"
    ).unwrap();

    pub static ref DATE_INLINE_LABEL: Regex = Regex::new(
        r"(?i)\bdate\s*[:\-]\s*(.+)$"
    ).unwrap();

    // Adjacent signed decimal-degree pair: -1.30969, 36.92089
    pub static ref DECIMAL_COORD_PAIR: Regex = Regex::new(
        r"(-?\d{1,3}\.\d+)\s*[,;\s]\s*(-?\d{1,3}\.\d+)"
    ).unwrap();

    // Combined two-axis DMS expression: 1°18'34.9"S 36°55'11.3"E
    pub static ref DMS_PAIR: Regex = Regex::new(
        r#"(?is)(\d{1,3})[°\s]\s*(\d{1,2})['\s]?\s*([\d.]+)"?\s*([NS])?.*?(\d{1,3})[°\s]\s*(\d{1,2})['\s]?\s*([\d.]+)"?\s*([EW])?"#
    ).unwrap();

    // Area magnitudes with their unit spellings
    pub static ref HECTARES: Regex = Regex::new(
        r"(?i)([\d,]*\.?\d+)\s*(?:hectares?|ha)\b"
    ).unwrap();

    pub static ref ACRES: Regex = Regex::new(
        r"(?i)([\d,]*\.?\d+)\s*acres?\b"
    ).unwrap();

    pub static ref BUILT_UP_SQM: Regex = Regex::new(
        r"(?i)(?:gross\s+plinth\s+area|built[\s\-]?up\s+area)[^\d\n\r]{0,40}([\d,]*\.?\d+)\s*(?:square\s*met(?:er|re)s?|sq\.?\s*m\b)"
    ).unwrap();

    pub static ref BUILT_UP_SQFT: Regex = Regex::new(
        r"(?i)(?:gross\s+plinth\s+area|built[\s\-]?up\s+area)[^\d\n\r]{0,40}([\d,]*\.?\d+)\s*(?:square\s*feet|sq\.?\s*ft)"
    ).unwrap();

    pub static ref SQFT_BARE: Regex = Regex::new(
        r"(?i)(\d[\d,]{2,})\s*(?:sq\.?\s*ft|square\s*feet)"
    ).unwrap();
}
