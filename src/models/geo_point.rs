//! Validated geographic coordinate pair

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WeatherWearError;

/// A latitude/longitude pair in decimal degrees.
///
/// Construction rejects non-finite values and anything outside
/// [-90, 90] x [-180, 180]. Equality is plain `f64` equality on both fields,
/// so two points match only when the same coordinates were stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a validated point
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherWearError::validation(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherWearError::validation(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as a short coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Serialized form of a point in durable storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoredPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for StoredPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

impl TryFrom<StoredPoint> for GeoPoint {
    type Error = WeatherWearError;

    fn try_from(stored: StoredPoint) -> crate::Result<Self> {
        GeoPoint::new(stored.latitude, stored.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(45.0, -93.0)]
    fn test_accepts_valid_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let point = GeoPoint::new(lat, lon).unwrap();
        assert_eq!(point.latitude(), lat);
        assert_eq!(point.longitude(), lon);
    }

    #[rstest]
    #[case(90.000_001, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(0.0, 180.5)]
    #[case(0.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn test_rejects_invalid_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let err = GeoPoint::new(lat, lon).unwrap_err();
        assert!(matches!(err, WeatherWearError::Validation { .. }));
    }

    #[test]
    fn test_exact_equality() {
        let a = GeoPoint::new(45.0, -93.0).unwrap();
        let b = GeoPoint::new(45.0, -93.0).unwrap();
        let c = GeoPoint::new(45.000_000_000_1, -93.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stored_point_conversion_validates() {
        let bad = StoredPoint {
            latitude: 123.0,
            longitude: 0.0,
        };
        assert!(GeoPoint::try_from(bad).is_err());

        let point = GeoPoint::new(10.0, 20.0).unwrap();
        let back = GeoPoint::try_from(StoredPoint::from(point)).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_format_coordinates() {
        let point = GeoPoint::new(46.818_234, 8.227_456).unwrap();
        assert_eq!(point.format_coordinates(), "46.8182, 8.2275");
    }
}
