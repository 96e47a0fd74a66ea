//! Monetary value normalization.

use super::patterns::{CURRENCY_TOKEN, SLASH_EQUALS};

/// Reduce a raw monetary match like `"KShs. 8,500,000/="` to a digits-only
/// canonical string.
///
/// Currency tokens and the OCR-mangled `/=` suffix are stripped first,
/// then everything that is not a digit, comma, or period; values are whole
/// currency units, so the remaining separators and decimal points are
/// dropped outright. Leading zeros are trimmed (keeping `"0"` when nothing
/// else remains). Returns `None` when no digits survive or the result is
/// shorter than `min_digits`.
pub fn normalize_money(raw: &str, min_digits: usize) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let stripped = CURRENCY_TOKEN.replace_all(raw, "");
    let stripped = SLASH_EQUALS.replace_all(&stripped, "");
    let retained: String = stripped
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    let digits: String = retained.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    let canonical = if trimmed.is_empty() { "0" } else { trimmed };

    if canonical.len() < min_digits {
        return None;
    }
    Some(canonical.to_string())
}
