//! Fuzzy date location and normalization.

use chrono::{Datelike, NaiveDate};

use super::clean_whitespace;
use super::patterns::{
    DATE_NUMERIC_DMY, DATE_NUMERIC_YMD, DATE_TEXTUAL_DMY, DATE_TEXTUAL_MDY, ORDINAL_AFTER_DIGIT,
};
use crate::models::config::{DateFallback, ExtractionConfig};

/// Calendar templates for textual day-month-year candidates.
const TEXTUAL_DMY_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y"];

/// Calendar templates for textual month-day-year candidates.
const TEXTUAL_MDY_FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y"];

/// Repair ordinal suffixes that OCR garbled into stray symbols, then strip
/// real ones, so both `17% April 2025` and `11th March 2025` parse.
pub(crate) fn strip_ordinals(candidate: &str) -> String {
    let repaired = candidate.replace('%', "th").replace('º', "th");
    ORDINAL_AFTER_DIGIT.replace_all(&repaired, "${1}").into_owned()
}

/// Two-digit years are windowed: 00-50 land in the 2000s, 51-99 in the
/// 1900s.
pub(crate) fn expand_year(raw: &str) -> i32 {
    let year: i32 = raw.parse().unwrap_or(0);
    if year < 100 {
        if year <= 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

/// Locate a date-shaped substring anywhere in `text` and return it in the
/// configured canonical format.
///
/// Shapes are tried in order: numeric year-first (already-canonical values
/// pass through unchanged), textual day-month-year with OCR ordinal
/// repair, numeric day-first, textual month-day-year. The first shape that
/// yields a candidate decides the outcome: a parse whose year falls in the
/// plausible range comes back canonical, anything else follows the
/// configured fallback policy. Returns `None` when no shape matches at
/// all. Never panics.
pub fn find_date(text: &str, config: &ExtractionConfig) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    if let Some(caps) = DATE_NUMERIC_YMD.captures(text) {
        let parsed = NaiveDate::from_ymd_opt(
            caps[1].parse().unwrap_or(0),
            caps[2].parse().unwrap_or(0),
            caps[3].parse().unwrap_or(0),
        );
        return finish(parsed, &caps[0], config);
    }

    if let Some(caps) = DATE_TEXTUAL_DMY.captures(text) {
        let cleaned = strip_ordinals(&caps[1]);
        let parsed = parse_templates(&cleaned, TEXTUAL_DMY_FORMATS);
        return finish(parsed, &cleaned, config);
    }

    if let Some(caps) = DATE_NUMERIC_DMY.captures(text) {
        let parsed = NaiveDate::from_ymd_opt(
            expand_year(&caps[3]),
            caps[2].parse().unwrap_or(0),
            caps[1].parse().unwrap_or(0),
        );
        return finish(parsed, &caps[0], config);
    }

    if let Some(caps) = DATE_TEXTUAL_MDY.captures(text) {
        let cleaned = strip_ordinals(&caps[1]);
        let parsed = parse_templates(&cleaned, TEXTUAL_MDY_FORMATS);
        return finish(parsed, &cleaned, config);
    }

    None
}

fn parse_templates(candidate: &str, formats: &[&str]) -> Option<NaiveDate> {
    let cleaned = clean_whitespace(candidate);
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

fn finish(parsed: Option<NaiveDate>, candidate: &str, config: &ExtractionConfig) -> Option<String> {
    match parsed {
        Some(date) if config.year_plausible(date.year()) => {
            Some(date.format(&config.date_format).to_string())
        }
        _ => match config.date_fallback {
            DateFallback::CleanedText => Some(clean_whitespace(candidate)),
            DateFallback::Sentinel => None,
        },
    }
}
