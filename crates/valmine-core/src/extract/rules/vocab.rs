//! Controlled-vocabulary term matching.
//!
//! Lookup is plain ordered list-membership, not fuzzy matching: the first
//! term in LIST order whose lowercase form is contained in the lowercase
//! text wins, regardless of where the term occurs in the document. Lists
//! are ordered by expected specificity, so ambiguous text resolves
//! predictably; downstream consumers rely on that tie-break.
//!
//! The tables are process-wide, read-only, and initialized once.

use lazy_static::lazy_static;

use crate::models::schema::VocabularyName;

/// An ordered, immutable list of canonical terms.
#[derive(Debug)]
pub struct ControlledVocabulary {
    name: &'static str,
    terms: Vec<&'static str>,
    lowered: Vec<String>,
}

impl ControlledVocabulary {
    pub fn new(name: &'static str, terms: &[&'static str]) -> Self {
        Self {
            name,
            terms: terms.to_vec(),
            lowered: terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Canonical terms in priority order.
    pub fn terms(&self) -> &[&'static str] {
        &self.terms
    }

    /// First term in list order contained in the text, case-insensitive.
    pub fn match_in(&self, text: &str) -> Option<&'static str> {
        if text.is_empty() {
            return None;
        }
        let haystack = text.to_lowercase();
        self.lowered
            .iter()
            .position(|term| haystack.contains(term.as_str()))
            .map(|index| self.terms[index])
    }
}

lazy_static! {
    /// Counties the reports cover, full names ahead of bare-name fallbacks.
    pub static ref COUNTIES: ControlledVocabulary = ControlledVocabulary::new(
        "counties",
        &[
            "Nairobi County",
            "Kiambu County",
            "Machakos County",
            "Kajiado County",
            "Nakuru County",
            "Mombasa County",
            "Kisumu County",
            "Uasin Gishu County",
            "Murang'a County",
            "Nyeri County",
            "Kilifi County",
            "Kericho County",
            "Nairobi",
            "Kiambu",
            "Machakos",
            "Kajiado",
            "Nakuru",
            "Mombasa",
        ],
    );

    /// Property types, most specific phrasing first.
    pub static ref PROPERTY_TYPES: ControlledVocabulary = ControlledVocabulary::new(
        "property_types",
        &[
            "Apartment",
            "Maisonette",
            "Townhouse",
            "Bungalow",
            "Villa",
            "Godown",
            "Office Block",
            "Shop",
            "Flat",
            "Vacant Plot",
            "Vacant Land",
        ],
    );

    /// Roster of valuers whose names appear on these reports.
    pub static ref VALUERS: ControlledVocabulary = ControlledVocabulary::new(
        "valuers",
        &[
            "Samuel K. Mwangi",
            "Grace Wanjiru Kamau",
            "Peter O. Otieno",
            "David N. Kariuki",
            "Esther Achieng Odhiambo",
        ],
    );

    /// Tenure kinds, interest phrasing ahead of the bare words.
    pub static ref TENURE_KINDS: ControlledVocabulary = ControlledVocabulary::new(
        "tenure_kinds",
        &[
            "Leasehold Interest",
            "Freehold Interest",
            "Leasehold",
            "Freehold",
        ],
    );
}

impl VocabularyName {
    /// The process-wide table this name refers to.
    pub fn vocabulary(&self) -> &'static ControlledVocabulary {
        match self {
            VocabularyName::Counties => &COUNTIES,
            VocabularyName::PropertyTypes => &PROPERTY_TYPES,
            VocabularyName::Valuers => &VALUERS,
            VocabularyName::TenureKinds => &TENURE_KINDS,
        }
    }
}
