//! Signature-anchored report-date location.
//!
//! One global pattern cannot find "the date this report was signed":
//! valuer names and dates occur throughout a report. The authoritative
//! date sits in the signature block near the end, so the search anchors on
//! the last line mentioning a valuer or signature phrase and inspects a
//! short window after it.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;

use super::clean_whitespace;
use super::dates::strip_ordinals;
use super::patterns::{DATE_INLINE_LABEL, DATE_LABEL_LINE, SIGNATURE_DATE_TOKEN};
use super::vocab::VALUERS;
use crate::models::config::ExtractionConfig;

/// Lines inspected from the anchor line forward.
const SIGNATURE_WINDOW: usize = 12;

/// Calendar templates for window candidates. The no-space variants absorb
/// OCR whitespace loss ("11March2025").
const WINDOW_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %b %Y",
    "%d%B%Y",
    "%d%b%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%Y-%m-%d",
];

lazy_static! {
    /// Lowercased anchor phrases: the valuer roster plus firm-behalf,
    /// practicing-valuer, and qualification phrasing.
    static ref ANCHOR_PHRASES: Vec<String> = {
        let mut anchors: Vec<String> = [
            "for and on behalf of",
            "registered & practicing valuer",
            "registered and practicing valuer",
            "practicing valuer",
            "registered valuer",
            "misk",
            "gmisk",
        ]
        .iter()
        .map(|phrase| phrase.to_string())
        .collect();
        anchors.extend(VALUERS.terms().iter().map(|name| name.to_lowercase()));
        anchors
    };
}

/// Locate the date the report was signed.
///
/// Anchors on the LAST line containing an anchor phrase: valuer names may
/// appear earlier in narrative text (a cover letter, say) without an
/// attached date, while the signature block is expected near the end.
/// Candidates inside the window come from a bare "Date" label line (value
/// on the following line), an inline "Date: <value>", and any standalone
/// date-shaped token. The first candidate that parses to a plausible year
/// wins; malformed candidates are simply skipped. Never panics.
pub fn locate_report_date(text: &str, config: &ExtractionConfig) -> Option<String> {
    let lines: Vec<String> = text.lines().map(|line| clean_whitespace(line)).collect();

    let anchor = lines.iter().rposition(|line| {
        let lowered = line.to_lowercase();
        ANCHOR_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    })?;

    let window_end = (anchor + SIGNATURE_WINDOW).min(lines.len());
    let window = &lines[anchor..window_end];

    let mut candidates: Vec<String> = Vec::new();
    for (offset, line) in window.iter().enumerate() {
        if DATE_LABEL_LINE.is_match(line) {
            // Bare "Date" label: the value sits on the following line.
            if let Some(next) = window.get(offset + 1) {
                if let Some(token) = SIGNATURE_DATE_TOKEN.find(next) {
                    candidates.push(token.as_str().to_string());
                }
            }
        }
        if let Some(caps) = DATE_INLINE_LABEL.captures(line) {
            candidates.push(caps[1].trim().to_string());
        }
        if let Some(token) = SIGNATURE_DATE_TOKEN.find(line) {
            candidates.push(token.as_str().to_string());
        }
    }

    candidates
        .iter()
        .find_map(|candidate| parse_window_candidate(candidate, config))
}

/// Parse one window candidate, accepting only plausible years.
fn parse_window_candidate(candidate: &str, config: &ExtractionConfig) -> Option<String> {
    // Comma separators confuse the calendar templates.
    let cleaned = clean_whitespace(&strip_ordinals(&candidate.replace(',', " ")));
    WINDOW_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
        .filter(|date| config.year_plausible(date.year()))
        .map(|date| date.format(&config.date_format).to_string())
}
