//! Record assembly across the field schema.

use std::path::Path;

use tracing::{debug, info};

use crate::models::config::{CoordinateMode, ValmineConfig};
use crate::models::record::{ExtractionRecord, SENTINEL};
use crate::models::schema::{default_schema, FieldDescriptor, FieldNormalizer, FieldSource};

use super::rules::area::{extract_built_up_area, extract_land_area, AreaUnit};
use super::rules::cascade::resolve_cascade;
use super::rules::coords::{extract_coordinates, Coordinate};
use super::rules::dates::find_date;
use super::rules::money::normalize_money;
use super::rules::signature::locate_report_date;

/// Trait for record extractors.
pub trait RecordExtractor {
    /// Extract a schema-complete record from document text.
    fn extract(&self, text: &str, source_path: &str) -> ExtractionRecord;
}

/// Drives field resolution for one document at a time.
///
/// Resolution is a pure function of (text, schema, configuration). No
/// state survives between documents, so one assembler can serve any number
/// of worker threads without coordination.
pub struct RecordAssembler {
    schema: Vec<FieldDescriptor>,
    config: ValmineConfig,
}

impl RecordAssembler {
    /// Create an assembler over the canonical schema.
    pub fn new(config: ValmineConfig) -> Self {
        Self {
            schema: default_schema(),
            config,
        }
    }

    /// Create an assembler over a caller-supplied schema.
    pub fn with_schema(config: ValmineConfig, schema: Vec<FieldDescriptor>) -> Self {
        Self { schema, config }
    }

    /// The active schema, in output order.
    pub fn schema(&self) -> &[FieldDescriptor] {
        &self.schema
    }

    /// Resolve every schema field against the document text.
    ///
    /// The output holds exactly the schema's fields in schema order;
    /// anything unresolvable carries the sentinel. Never fails, whatever
    /// the input looks like (the empty string included).
    pub fn assemble(&self, text: &str, source_path: &str) -> ExtractionRecord {
        info!("assembling record from {} characters of text", text.len());

        // One scan feeds both coordinate axes.
        let coordinate = extract_coordinates(text);

        let mut record = ExtractionRecord::with_capacity(self.schema.len());
        for field in &self.schema {
            let value = self.resolve(field, text, source_path, coordinate, &record);
            record.insert(&field.name, value.unwrap_or_else(|| SENTINEL.to_string()));
        }

        debug!(
            "{} of {} fields unresolved",
            record.sentinel_count(),
            record.len()
        );
        record
    }

    fn resolve(
        &self,
        field: &FieldDescriptor,
        text: &str,
        source_path: &str,
        coordinate: Option<Coordinate>,
        resolved: &ExtractionRecord,
    ) -> Option<String> {
        let extraction = &self.config.extraction;

        let raw = match &field.source {
            FieldSource::Cascade { rules } => resolve_cascade(rules, text),
            FieldSource::Vocabulary { list } => {
                list.vocabulary().match_in(text).map(str::to_string)
            }
            FieldSource::Mirror { field: source } => resolved
                .get(source)
                .filter(|value| *value != SENTINEL)
                .map(str::to_string),
            FieldSource::SignatureDate => locate_report_date(text, extraction),
            FieldSource::Coordinate { axis } => {
                coordinate.map(|pair| match extraction.coordinate_mode {
                    CoordinateMode::Decimal => pair.decimal_axis(*axis),
                    CoordinateMode::Dms => pair.dms_axis(*axis),
                })
            }
            FieldSource::LandArea => extract_land_area(text)
                .and_then(|area| area.convert_to(AreaUnit::Hectare))
                .map(|area| area.format(3)),
            FieldSource::BuiltUpArea => extract_built_up_area(text)
                .and_then(|area| area.convert_to(AreaUnit::SquareMetre))
                .map(|area| area.format(2)),
            FieldSource::PageCount => Some(self.page_count(text)),
            FieldSource::SourceFile => Path::new(source_path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        };

        match field.normalizer {
            Some(FieldNormalizer::Money) => {
                raw.and_then(|value| normalize_money(&value, extraction.min_money_digits))
            }
            Some(FieldNormalizer::Date) => raw.and_then(|value| find_date(&value, extraction)),
            None => raw,
        }
    }

    /// Page count derived from the acquisition collaborator's page-break
    /// markers.
    fn page_count(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return "0".to_string();
        }
        let marker = self.config.pdf.page_break_marker.as_str();
        (text.matches(marker).count() + 1).to_string()
    }
}

impl RecordExtractor for RecordAssembler {
    fn extract(&self, text: &str, source_path: &str) -> ExtractionRecord {
        self.assemble(text, source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_REPORT: &str = "\
Our Ref: NWR/417/VAL/2025/03\n\
REPORT AND VALUATION OF L.R. NO. 12715/225\n\
Prepared on the instructions of Harambee Savings Bank, Mortgage Division\n\
--- PAGE BREAK ---\n\
SITUATION\n\
The property is situated at Ondiri, within Kikuyu Township in Kiambu County,\n\
approximately 800 metres off Nairobi-Nakuru highway.\n\
Google coordinates: -1.30969, 36.92089\n\
TITLE DETAILS\n\
The subject title is held under a Leasehold Interest of 99 years.\n\
The parcel was inspected for valuation on 4th March 2025.\n\
PLOT AREA\n\
The plot measures approximately 2.5 acres and is put to residential use.\n\
IMPROVEMENTS\n\
The main dwelling is a 4 bedroomed Townhouse with a built-up area of\n\
approximately 1,500 sq. ft, owner occupied and in good condition.\n\
--- PAGE BREAK ---\n\
VALUATION\n\
Current Market Value: KShs. 8,500,000/=\n\
Land Value: KShs. 3,200,000/=\n\
Yours faithfully,\n\
Grace Wanjiru Kamau\n\
Registered & Practicing Valuer\n\
For and on behalf of NW Realite Limited\n\
Date: 11th March 2025\n";

    fn assembler() -> RecordAssembler {
        RecordAssembler::new(ValmineConfig::default())
    }

    #[test]
    fn test_sample_report_resolves_key_fields() {
        let record = assembler().assemble(SAMPLE_REPORT, "/data/report_225.pdf");

        assert_eq!(record.get("FileName"), Some("report_225.pdf"));
        assert_eq!(record.get("REF_ID"), Some("NWR/417/VAL/2025/03"));
        assert_eq!(record.get("VALUATION_DATE"), Some("2025-03-11"));
        assert_eq!(record.get("INSPECTION_DATE"), Some("2025-03-04"));
        assert_eq!(record.get("VALUER_NAME"), Some("Grace Wanjiru Kamau"));
        assert_eq!(record.get("TITLE_NUMBER"), Some("12715/225"));
        assert_eq!(record.get("COUNTY"), Some("Kiambu County"));
        assert_eq!(record.get("PROPERTY_TYPE"), Some("Townhouse"));
        assert_eq!(record.get("LATITUDE"), Some("-1.309690"));
        assert_eq!(record.get("LONGITUDE"), Some("36.920890"));
        assert_eq!(record.get("TENURE"), Some("Leasehold Interest"));
        assert_eq!(record.get("LAND_AREA"), Some("1.012"));
        assert_eq!(record.get("LAND_USE"), Some("residential"));
        assert_eq!(record.get("BEDROOMS"), Some("4"));
        assert_eq!(record.get("BUILTUP_AREA"), Some("139.35"));
        assert_eq!(record.get("OCCUPIED"), Some("owner occupied"));
        assert_eq!(record.get("MARKET_VALUE"), Some("8500000"));
        assert_eq!(record.get("LAND_VALUE"), Some("3200000"));
        assert_eq!(record.get("PAGE_COUNT"), Some("3"));
    }

    #[test]
    fn test_proprietor_mirrors_client_name() {
        let record = assembler().assemble(SAMPLE_REPORT, "report.pdf");
        assert_eq!(record.get("PROPRIETOR"), record.get("CLIENT_NAME"));
        assert!(!record.is_sentinel("PROPRIETOR"));
    }

    #[test]
    fn test_empty_input_yields_full_sentinel_record() {
        let record = assembler().assemble("", "");

        let expected: Vec<String> = default_schema().into_iter().map(|f| f.name).collect();
        let actual: Vec<&str> = record.field_names().collect();
        assert_eq!(actual, expected);

        assert_eq!(record.get("PAGE_COUNT"), Some("0"));
        for (name, value) in record.iter() {
            if name != "PAGE_COUNT" {
                assert_eq!(value, SENTINEL, "{name} should be unresolved");
            }
        }
    }

    #[test]
    fn test_record_key_set_matches_schema_for_any_input() {
        let assembler = assembler();
        let expected: Vec<String> = default_schema().into_iter().map(|f| f.name).collect();

        for text in ["", "garbage \u{fffd} text", SAMPLE_REPORT] {
            let record = assembler.assemble(text, "doc.pdf");
            let actual: Vec<&str> = record.field_names().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_mirror_of_unresolved_field_stays_sentinel() {
        let record = assembler().assemble("text with no client phrasing", "doc.pdf");
        assert!(record.is_sentinel("CLIENT_NAME"));
        assert!(record.is_sentinel("PROPRIETOR"));
    }

    #[test]
    fn test_dms_output_mode() {
        let mut config = ValmineConfig::default();
        config.extraction.coordinate_mode = CoordinateMode::Dms;
        let record = RecordAssembler::new(config).assemble(SAMPLE_REPORT, "doc.pdf");

        assert_eq!(record.get("LATITUDE"), Some("1°18'34.9\"S"));
        assert_eq!(record.get("LONGITUDE"), Some("36°55'15.2\"E"));
    }

    #[test]
    fn test_page_count_without_markers() {
        let record = assembler().assemble("single page of text", "doc.txt");
        assert_eq!(record.get("PAGE_COUNT"), Some("1"));
    }
}
