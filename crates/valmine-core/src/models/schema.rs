//! Field schema: descriptors, value sources, and the canonical default
//! schema for Kenyan property valuation reports.
//!
//! Descriptors are plain data (serde-derivable), so a differently
//! structured document family can supply its own schema without touching
//! the resolution logic.

use serde::{Deserialize, Serialize};

/// A single extraction rule in a cascade.
///
/// Capture policy is fixed: the first capture group with non-empty trimmed
/// content wins, falling back to the whole match. Patterns are compiled
/// case-insensitive, multi-line, with `.` matching newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRule {
    pub pattern: String,
}

impl ExtractionRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

/// Coordinate axis selector for coordinate-sourced fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Reference to one of the process-wide vocabulary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyName {
    Counties,
    PropertyTypes,
    Valuers,
    TenureKinds,
}

/// How a field obtains its raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldSource {
    /// Ordered regex cascade over the whole document text.
    Cascade { rules: Vec<ExtractionRule> },

    /// First term of a canonical list contained in the text.
    Vocabulary { list: VocabularyName },

    /// Copy of a field resolved earlier in schema order.
    Mirror { field: String },

    /// Report date located from the signature block.
    SignatureDate,

    /// One axis of the document's coordinate pair.
    Coordinate { axis: Axis },

    /// Plot area in hectares, converted from acres when needed.
    LandArea,

    /// Built-up area in square metres, converted from square feet when
    /// needed.
    BuiltUpArea,

    /// Page-break marker count plus one.
    PageCount,

    /// Base name of the source file.
    SourceFile,
}

/// Normalizer applied to a field's raw match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNormalizer {
    /// Digits-only monetary string.
    Money,
    /// Canonical calendar date.
    Date,
}

/// One field of the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Output column name.
    pub name: String,

    /// Where the raw value comes from.
    pub source: FieldSource,

    /// Optional normalizer for the raw value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<FieldNormalizer>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, source: FieldSource) -> Self {
        Self {
            name: name.into(),
            source,
            normalizer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: FieldNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }
}

fn cascade(name: &str, patterns: &[&str]) -> FieldDescriptor {
    FieldDescriptor::new(
        name,
        FieldSource::Cascade {
            rules: patterns.iter().copied().map(ExtractionRule::new).collect(),
        },
    )
}

fn vocabulary(name: &str, list: VocabularyName) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldSource::Vocabulary { list })
}

/// The canonical valuation-report schema.
///
/// Field order is the output column order and also the resolution order:
/// mirror fields may only reference fields that appear before them.
pub fn default_schema() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("FileName", FieldSource::SourceFile),
        cascade(
            "REF_ID",
            &[
                r"Our\s+Ref[.:\s]+([\w/\-.]+)",
                r"\bRef(?:erence)?\s+No[.:\s]*([\w/\-.]+)",
                r"\b(\d{3,}/[A-Za-z]+/\d+/\d+/\d+)\b",
            ],
        ),
        FieldDescriptor::new("VALUATION_DATE", FieldSource::SignatureDate),
        cascade(
            "INSPECTION_DATE",
            &[
                r"inspected(?:\s+for\s+valuation)?\s+on\s+([^\n\r]{1,60})",
                r"Date\s+of\s+Inspection\s*[:\-]?\s*([^\n\r]{1,60})",
            ],
        )
        .with_normalizer(FieldNormalizer::Date),
        vocabulary("VALUER_NAME", VocabularyName::Valuers),
        cascade(
            "TITLE_NUMBER",
            &[
                r"L\.?R\.?\s*(?:No|Number)\.?\s*:?\s*(\d[\d/\-]*)",
                r"Title\s*(?:No|Number)\.?\s*:?\s*(\d[\d/\-]*)",
                r"I\.?R\.?\s*(?:No|Number)\.?\s*:?\s*(\d[\d/\-]*)",
            ],
        ),
        cascade(
            "CLIENT_NAME",
            &[
                r"(?:on\s+the\s+)?instructions\s+of\s+([A-Z][^\n\r,]{2,60})",
                r"\bClient\s*[:\-]\s*([^\n\r]{3,60})",
                r"registered\s+in\s+the\s+names?\s+of\s+([^\n\r.]{3,60})",
            ],
        ),
        vocabulary("COUNTY", VocabularyName::Counties),
        cascade(
            "LOCATION",
            &[
                r"situated\s+(?:at|in|along|within)\s+([^\n\r,.]{3,60})",
                r"\bLocation\s*[:\-]\s*([^\n\r]{3,60})",
                r"([A-Z][A-Za-z\s]{2,30})\s+(?:Township|Estate)\b",
            ],
        ),
        vocabulary("PROPERTY_TYPE", VocabularyName::PropertyTypes),
        FieldDescriptor::new(
            "LATITUDE",
            FieldSource::Coordinate {
                axis: Axis::Latitude,
            },
        ),
        FieldDescriptor::new(
            "LONGITUDE",
            FieldSource::Coordinate {
                axis: Axis::Longitude,
            },
        ),
        vocabulary("TENURE", VocabularyName::TenureKinds),
        FieldDescriptor::new(
            "PROPRIETOR",
            FieldSource::Mirror {
                field: "CLIENT_NAME".to_string(),
            },
        ),
        FieldDescriptor::new("LAND_AREA", FieldSource::LandArea),
        cascade(
            "LAND_USE",
            &[
                r"(?:user|land\s+use)\s*[:\-]?\s*\(?\s*(residential|commercial|agricultural|industrial|mixed\s+use)",
                r"\b(residential|commercial|agricultural|industrial|mixed\s+use)\b",
            ],
        ),
        cascade("BEDROOMS", &[r"(\d{1,2})\s*(?:-\s*)?bed(?:room)?(?:s|ed)?\b"]),
        FieldDescriptor::new("BUILTUP_AREA", FieldSource::BuiltUpArea),
        cascade(
            "OCCUPIED",
            &[r"\b(owner[\s\-]?occupied|tenant[\s\-]?occupied|vacant|occupied)\b"],
        ),
        cascade(
            "MARKET_VALUE",
            &[
                r"(?:Current\s+)?Market\s+Value[^\d\n\r]{0,40}([\d.,/= ]+)",
                r"Market\s+Value[^\n\r]{0,40}?KShs\.?\s*([\d.,/= ]+)",
            ],
        )
        .with_normalizer(FieldNormalizer::Money),
        cascade(
            "LAND_VALUE",
            &[
                r"Land\s+Value[^\d\n\r]{0,40}([\d.,/= ]+)",
                r"\bLand\b[^\n\r]{0,30}KShs\.?\s*([\d.,/= ]+)",
            ],
        )
        .with_normalizer(FieldNormalizer::Money),
        FieldDescriptor::new("PAGE_COUNT", FieldSource::PageCount),
    ]
}
