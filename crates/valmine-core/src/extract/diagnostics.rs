//! Post-extraction diagnostics for operator troubleshooting.
//!
//! Side outputs only; nothing here feeds back into the record.

use crate::models::record::{ExtractionRecord, SENTINEL};

/// Summarize whether the required fields resolved.
///
/// When any required field is unresolved, the report names them and states
/// the sentinel count across the whole record.
pub fn field_report(record: &ExtractionRecord, required: &[String]) -> String {
    let missing: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|name| record.get(name).unwrap_or(SENTINEL) == SENTINEL)
        .collect();

    if missing.is_empty() {
        "all key fields present".to_string()
    } else {
        format!(
            "missing key fields: {}; {} of {} fields unresolved overall",
            missing.join(", "),
            record.sentinel_count(),
            record.len()
        )
    }
}

/// FOUND/MISSING mark per field, in record order.
pub fn presence_marks(record: &ExtractionRecord) -> Vec<(String, &'static str)> {
    record
        .iter()
        .map(|(name, value)| {
            let mark = if value == SENTINEL { "MISSING" } else { "FOUND" };
            (name.to_string(), mark)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn sample_record() -> ExtractionRecord {
        let mut record = ExtractionRecord::new();
        record.insert("FileName", "report.pdf");
        record.insert("VALUATION_DATE", SENTINEL);
        record.insert("VALUER_NAME", "Grace Wanjiru Kamau");
        record.insert("TITLE_NUMBER", SENTINEL);
        record.insert("COUNTY", "Kiambu County");
        record.insert("MARKET_VALUE", "8500000");
        record.insert("LAND_VALUE", SENTINEL);
        record
    }

    #[test]
    fn test_missing_required_fields_named_with_total_count() {
        let record = sample_record();
        let report = field_report(
            &record,
            &required(&[
                "VALUATION_DATE",
                "VALUER_NAME",
                "TITLE_NUMBER",
                "COUNTY",
                "MARKET_VALUE",
            ]),
        );
        // Two of five required fields missing; three sentinels overall.
        assert_eq!(
            report,
            "missing key fields: VALUATION_DATE, TITLE_NUMBER; 3 of 7 fields unresolved overall"
        );
    }

    #[test]
    fn test_all_required_present() {
        let record = sample_record();
        let report = field_report(&record, &required(&["COUNTY", "MARKET_VALUE"]));
        assert_eq!(report, "all key fields present");
    }

    #[test]
    fn test_required_field_absent_from_record_counts_as_missing() {
        let record = sample_record();
        let report = field_report(&record, &required(&["NO_SUCH_FIELD"]));
        assert!(report.starts_with("missing key fields: NO_SUCH_FIELD"));
    }

    #[test]
    fn test_presence_marks() {
        let marks = presence_marks(&sample_record());
        assert_eq!(marks[0], ("FileName".to_string(), "FOUND"));
        assert_eq!(marks[1], ("VALUATION_DATE".to_string(), "MISSING"));
        assert_eq!(marks.len(), 7);
    }
}
