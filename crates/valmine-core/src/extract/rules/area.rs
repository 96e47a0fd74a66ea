//! Plot and built-up area extraction with unit conversion.

use lazy_static::lazy_static;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::patterns::{ACRES, BUILT_UP_SQFT, BUILT_UP_SQM, HECTARES, SQFT_BARE};

lazy_static! {
    /// 1 acre = 0.404686 hectares
    static ref ACRE_TO_HECTARE: Decimal = Decimal::new(404_686, 6);

    /// 1 square foot = 0.092903 square metres
    static ref SQFT_TO_SQM: Decimal = Decimal::new(92_903, 6);
}

/// Area units the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    Hectare,
    Acre,
    SquareFoot,
    SquareMetre,
}

/// A numeric area value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaMeasurement {
    pub value: Decimal,
    pub unit: AreaUnit,
}

impl AreaMeasurement {
    pub fn new(value: Decimal, unit: AreaUnit) -> Self {
        Self { value, unit }
    }

    /// Convert between the land units (hectare/acre) or the floor-space
    /// units (square foot/square metre). Cross-family conversion is not
    /// defined.
    pub fn convert_to(&self, unit: AreaUnit) -> Option<AreaMeasurement> {
        use AreaUnit::*;
        let value = match (self.unit, unit) {
            (from, to) if from == to => self.value,
            (Acre, Hectare) => self.value * *ACRE_TO_HECTARE,
            (Hectare, Acre) => self.value / *ACRE_TO_HECTARE,
            (SquareFoot, SquareMetre) => self.value * *SQFT_TO_SQM,
            (SquareMetre, SquareFoot) => self.value / *SQFT_TO_SQM,
            _ => return None,
        };
        Some(AreaMeasurement::new(value, unit))
    }

    /// Fixed-precision rendering, rounding halves away from zero.
    pub fn format(&self, decimals: u32) -> String {
        let rounded = self
            .value
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.prec$}", rounded, prec = decimals as usize)
    }
}

/// Plot area in whichever land unit the text mentions, hectares preferred
/// when both appear.
pub fn extract_land_area(text: &str) -> Option<AreaMeasurement> {
    if let Some(caps) = HECTARES.captures(text) {
        if let Some(value) = parse_decimal(&caps[1]) {
            return Some(AreaMeasurement::new(value, AreaUnit::Hectare));
        }
    }
    if let Some(caps) = ACRES.captures(text) {
        if let Some(value) = parse_decimal(&caps[1]) {
            return Some(AreaMeasurement::new(value, AreaUnit::Acre));
        }
    }
    None
}

/// Built-up area, label-anchored patterns first, bare square-footage as a
/// fallback.
pub fn extract_built_up_area(text: &str) -> Option<AreaMeasurement> {
    if let Some(caps) = BUILT_UP_SQM.captures(text) {
        if let Some(value) = parse_decimal(&caps[1]) {
            return Some(AreaMeasurement::new(value, AreaUnit::SquareMetre));
        }
    }
    if let Some(caps) = BUILT_UP_SQFT.captures(text) {
        if let Some(value) = parse_decimal(&caps[1]) {
            return Some(AreaMeasurement::new(value, AreaUnit::SquareFoot));
        }
    }
    if let Some(caps) = SQFT_BARE.captures(text) {
        if let Some(value) = parse_decimal(&caps[1]) {
            return Some(AreaMeasurement::new(value, AreaUnit::SquareFoot));
        }
    }
    None
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', "")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acres_converted_to_hectares() {
        let area = extract_land_area("a parcel of 2.5 acres")
            .unwrap()
            .convert_to(AreaUnit::Hectare)
            .unwrap();
        // 2.5 * 0.404686 = 1.011715
        assert_eq!(area.format(3), "1.012");
        assert_eq!(area.format(6), "1.011715");
    }

    #[test]
    fn test_hectares_preferred_when_both_present() {
        let area = extract_land_area("1.012 hectares (2.5 acres)").unwrap();
        assert_eq!(area.unit, AreaUnit::Hectare);
        assert_eq!(area.format(3), "1.012");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let area = extract_land_area("1.0125 ha").unwrap();
        assert_eq!(area.format(3), "1.013");
    }

    #[test]
    fn test_built_up_square_feet_converted() {
        let area = extract_built_up_area("The built-up area is approximately 1,500 sq. ft")
            .unwrap()
            .convert_to(AreaUnit::SquareMetre)
            .unwrap();
        // 1500 * 0.092903 = 139.3545
        assert_eq!(area.format(2), "139.35");
    }

    #[test]
    fn test_built_up_square_metres_direct() {
        let area = extract_built_up_area("gross plinth area of 139.35 square metres").unwrap();
        assert_eq!(area.unit, AreaUnit::SquareMetre);
        assert_eq!(area.format(2), "139.35");
    }

    #[test]
    fn test_bare_square_footage_fallback() {
        let area = extract_built_up_area("a 2,400 sq ft maisonette").unwrap();
        assert_eq!(area.unit, AreaUnit::SquareFoot);
        assert_eq!(area.value, Decimal::from(2400));
    }

    #[test]
    fn test_round_trip_conversion() {
        let hectares = AreaMeasurement::new(Decimal::new(1_011_715, 6), AreaUnit::Hectare);
        let acres = hectares.convert_to(AreaUnit::Acre).unwrap();
        assert_eq!(acres.format(1), "2.5");
    }

    #[test]
    fn test_cross_family_conversion_undefined() {
        let hectares = AreaMeasurement::new(Decimal::ONE, AreaUnit::Hectare);
        assert_eq!(hectares.convert_to(AreaUnit::SquareMetre), None);
    }

    #[test]
    fn test_neither_unit_present() {
        assert_eq!(extract_land_area("no measurements here"), None);
        assert_eq!(extract_built_up_area("no measurements here"), None);
    }
}
