//! Saved map pin and its display metadata

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Text shown in place of metadata that has not been resolved.
pub const PLACEHOLDER_TEXT: &str = "N/A";

/// Place name and locality resolved by reverse geocoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    pub title: String,
    pub locality: String,
}

impl PinMetadata {
    #[must_use]
    pub fn new(title: impl Into<String>, locality: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            locality: locality.into(),
        }
    }
}

/// A pin the user dropped on the map
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPin {
    pub point: GeoPoint,
    /// Filled in after the pin exists, once geocoding resolves
    pub metadata: Option<PinMetadata>,
}

impl SavedPin {
    #[must_use]
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            metadata: None,
        }
    }

    /// Title for display, falling back to the placeholder
    #[must_use]
    pub fn title(&self) -> &str {
        self.metadata
            .as_ref()
            .map_or(PLACEHOLDER_TEXT, |m| m.title.as_str())
    }

    /// Locality for display, falling back to the placeholder
    #[must_use]
    pub fn locality(&self) -> &str {
        self.metadata
            .as_ref()
            .map_or(PLACEHOLDER_TEXT, |m| m.locality.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_without_metadata() {
        let pin = SavedPin::new(GeoPoint::new(1.0, 2.0).unwrap());
        assert_eq!(pin.title(), PLACEHOLDER_TEXT);
        assert_eq!(pin.locality(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_metadata_is_displayed() {
        let mut pin = SavedPin::new(GeoPoint::new(1.0, 2.0).unwrap());
        pin.metadata = Some(PinMetadata::new("Townsville", "RegionX"));
        assert_eq!(pin.title(), "Townsville");
        assert_eq!(pin.locality(), "RegionX");
    }
}
