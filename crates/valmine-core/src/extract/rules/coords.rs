//! Geographic coordinate extraction.

use super::patterns::{DECIMAL_COORD_PAIR, DMS_PAIR};
use crate::models::schema::Axis;

/// A validated coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a pair, range-checking latitude to [-90, 90] and longitude to
    /// [-180, 180].
    pub fn validated(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.abs() <= 90.0 && longitude.abs() <= 180.0 {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// One axis as a decimal-degree string.
    pub fn decimal_axis(&self, axis: Axis) -> String {
        match axis {
            Axis::Latitude => format!("{:.6}", self.latitude),
            Axis::Longitude => format!("{:.6}", self.longitude),
        }
    }

    /// One axis as a degrees-minutes-seconds string with a hemisphere
    /// letter.
    pub fn dms_axis(&self, axis: Axis) -> String {
        match axis {
            Axis::Latitude => render_dms(self.latitude, 'N', 'S'),
            Axis::Longitude => render_dms(self.longitude, 'E', 'W'),
        }
    }
}

fn render_dms(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let minutes = ((magnitude - degrees) * 60.0).trunc();
    let seconds = (magnitude - degrees - minutes / 60.0) * 3600.0;
    format!(
        "{}°{}'{:.1}\"{}",
        degrees as u32, minutes as u32, seconds, hemisphere
    )
}

/// Locate a latitude/longitude pair in text.
///
/// The decimal path reads the first adjacent signed decimal-degree pair as
/// (latitude, longitude); a pair arriving transposed is swapped when the
/// magnitudes make the order unambiguous (|latitude| above 90 while the
/// other token is not). When no valid decimal pair is present, a combined
/// degrees-minutes-seconds expression is tried, with southern/eastern
/// hemisphere defaults matching the documents' region. Out-of-range pairs
/// are discarded. Never panics.
pub fn extract_coordinates(text: &str) -> Option<Coordinate> {
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = DECIMAL_COORD_PAIR.captures(text) {
        let first: Option<f64> = caps[1].parse().ok();
        let second: Option<f64> = caps[2].parse().ok();
        if let (Some(mut latitude), Some(mut longitude)) = (first, second) {
            if latitude.abs() > 90.0 && longitude.abs() <= 90.0 {
                std::mem::swap(&mut latitude, &mut longitude);
            }
            if let Some(coordinate) = Coordinate::validated(latitude, longitude) {
                return Some(coordinate);
            }
        }
    }

    let caps = DMS_PAIR.captures(text)?;
    let lat_degrees: f64 = caps[1].parse().ok()?;
    let lat_minutes: f64 = caps[2].parse().ok()?;
    let lat_seconds: f64 = caps[3].parse().ok()?;
    let lat_hemisphere = caps.get(4).map_or("S", |m| m.as_str());
    let lon_degrees: f64 = caps[5].parse().ok()?;
    let lon_minutes: f64 = caps[6].parse().ok()?;
    let lon_seconds: f64 = caps[7].parse().ok()?;
    let lon_hemisphere = caps.get(8).map_or("E", |m| m.as_str());

    let mut latitude = lat_degrees + lat_minutes / 60.0 + lat_seconds / 3600.0;
    let mut longitude = lon_degrees + lon_minutes / 60.0 + lon_seconds / 3600.0;
    if lat_hemisphere.eq_ignore_ascii_case("S") {
        latitude = -latitude;
    }
    if lon_hemisphere.eq_ignore_ascii_case("W") {
        longitude = -longitude;
    }

    Coordinate::validated(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_pair() {
        let coordinate = extract_coordinates("GPS: -1.30969, 36.92089").unwrap();
        assert!((coordinate.latitude - -1.30969).abs() < 1e-9);
        assert!((coordinate.longitude - 36.92089).abs() < 1e-9);
        assert_eq!(coordinate.decimal_axis(Axis::Latitude), "-1.309690");
        assert_eq!(coordinate.decimal_axis(Axis::Longitude), "36.920890");
    }

    #[test]
    fn test_idempotent_on_canonical_pair() {
        let coordinate = extract_coordinates("-1.309690, 36.920890").unwrap();
        assert_eq!(coordinate.decimal_axis(Axis::Latitude), "-1.309690");
        assert_eq!(coordinate.decimal_axis(Axis::Longitude), "36.920890");
    }

    #[test]
    fn test_transposed_pair_swapped() {
        let coordinate = extract_coordinates("100.5, 36.9").unwrap();
        assert!((coordinate.latitude - 36.9).abs() < 1e-9);
        assert!((coordinate.longitude - 100.5).abs() < 1e-9);
    }

    #[test]
    fn test_pair_invalid_even_after_swap() {
        assert_eq!(extract_coordinates("200.0, 95.0"), None);
    }

    #[test]
    fn test_dms_pair_converted() {
        let coordinate = extract_coordinates(r#"1°18'34.9"S 36°55'11.3"E"#).unwrap();
        assert!((coordinate.latitude - -1.309694).abs() < 1e-4);
        assert!((coordinate.longitude - 36.919806).abs() < 1e-4);
    }

    #[test]
    fn test_dms_hemisphere_defaults_south_east() {
        let coordinate = extract_coordinates("1°18'34.9 36°55'11.3").unwrap();
        assert!(coordinate.latitude < 0.0);
        assert!(coordinate.longitude > 0.0);
    }

    #[test]
    fn test_dms_rendering() {
        let coordinate = Coordinate::validated(-1.309694, 36.919806).unwrap();
        assert_eq!(coordinate.dms_axis(Axis::Latitude), "1°18'34.9\"S");
        assert_eq!(coordinate.dms_axis(Axis::Longitude), "36°55'11.3\"E");
    }

    #[test]
    fn test_no_coordinates_present() {
        assert_eq!(extract_coordinates("no numbers of note"), None);
        assert_eq!(extract_coordinates(""), None);
    }
}
