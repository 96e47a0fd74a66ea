//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the valmine pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValmineConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF acquisition configuration.
    pub pdf: PdfConfig,
}

/// Policy for a date candidate that resists every calendar template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFallback {
    /// Keep the whitespace-normalized candidate text.
    CleanedText,
    /// Give up and report the field as unresolved.
    Sentinel,
}

/// Output representation for resolved coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateMode {
    /// Decimal degrees, six decimal places.
    Decimal,
    /// Degrees-minutes-seconds with a hemisphere letter.
    Dms,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum digit count for an accepted monetary value.
    pub min_money_digits: usize,

    /// Earliest plausible report year.
    pub year_min: i32,

    /// Latest plausible report year.
    pub year_max: i32,

    /// Canonical output format for resolved dates (chrono strftime).
    pub date_format: String,

    /// What to do with a date candidate no template can parse.
    pub date_fallback: DateFallback,

    /// Output representation for coordinates.
    pub coordinate_mode: CoordinateMode,

    /// Fields the diagnostic reporter treats as required.
    pub required_fields: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_money_digits: 4,
            year_min: 2015,
            year_max: 2025,
            date_format: "%Y-%m-%d".to_string(),
            date_fallback: DateFallback::CleanedText,
            coordinate_mode: CoordinateMode::Decimal,
            required_fields: vec![
                "VALUATION_DATE".to_string(),
                "VALUER_NAME".to_string(),
                "TITLE_NUMBER".to_string(),
                "COUNTY".to_string(),
                "MARKET_VALUE".to_string(),
            ],
        }
    }
}

impl ExtractionConfig {
    /// Whether a parsed year falls inside the plausible range.
    pub fn year_plausible(&self, year: i32) -> bool {
        (self.year_min..=self.year_max).contains(&year)
    }
}

/// PDF acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Marker inserted between pages of acquired text.
    pub page_break_marker: String,

    /// Minimum character count for acquired text to be considered usable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_break_marker: "--- PAGE BREAK ---".to_string(),
            min_text_length: 50,
        }
    }
}

impl ValmineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = ValmineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ValmineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.extraction.min_money_digits, 4);
        assert_eq!(back.extraction.date_format, "%Y-%m-%d");
        assert_eq!(back.extraction.coordinate_mode, CoordinateMode::Decimal);
        assert_eq!(back.pdf.page_break_marker, "--- PAGE BREAK ---");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ValmineConfig =
            serde_json::from_str(r#"{"extraction":{"year_max":2030}}"#).unwrap();
        assert_eq!(config.extraction.year_max, 2030);
        assert_eq!(config.extraction.year_min, 2015);
        assert!(config.extraction.year_plausible(2030));
        assert!(!config.extraction.year_plausible(2031));
    }
}
