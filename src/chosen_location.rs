//! The single location the forecast is shown for

use tracing::{debug, warn};

use crate::models::{GeoPoint, StoredPoint};
use crate::storage::{CHOSEN_LOCATION_KEY, KeyValueStore};
use crate::{Result, WeatherWearError};

/// Persisted "show the forecast for this place" point.
///
/// Independent of the saved pins: choosing overwrites the previous value.
pub struct ChosenLocation<S> {
    storage: S,
}

impl<S: KeyValueStore> ChosenLocation<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the chosen location
    pub fn set_chosen(&self, point: GeoPoint) -> Result<()> {
        let bytes = postcard::to_stdvec(&StoredPoint::from(point)).map_err(|e| {
            WeatherWearError::storage_write(format!("encode chosen location: {e}"))
        })?;
        self.storage.put(CHOSEN_LOCATION_KEY, bytes)?;
        debug!("Chose {} for the forecast", point);
        Ok(())
    }

    /// The chosen location, or `None` if unset or unreadable
    #[must_use]
    pub fn get_chosen(&self) -> Option<GeoPoint> {
        let bytes = match self.storage.get(CHOSEN_LOCATION_KEY) {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!("Treating unreadable chosen location as unset: {}", e);
                return None;
            }
        };
        let stored: StoredPoint = postcard::from_bytes(&bytes)
            .map_err(|e| warn!("Discarding malformed chosen location: {}", e))
            .ok()?;
        GeoPoint::try_from(stored)
            .map_err(|e| warn!("Discarding invalid chosen location: {}", e))
            .ok()
    }

    /// Forget the chosen location
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(CHOSEN_LOCATION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_unset_is_none() {
        let chosen = ChosenLocation::new(MemoryStore::new());
        assert_eq!(chosen.get_chosen(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let chosen = ChosenLocation::new(MemoryStore::new());

        chosen.set_chosen(GeoPoint::new(1.0, 2.0).unwrap()).unwrap();
        assert_eq!(chosen.get_chosen(), Some(GeoPoint::new(1.0, 2.0).unwrap()));

        chosen.set_chosen(GeoPoint::new(3.0, 4.0).unwrap()).unwrap();
        assert_eq!(chosen.get_chosen(), Some(GeoPoint::new(3.0, 4.0).unwrap()));
    }

    #[test]
    fn test_persists_across_instances() {
        let storage = MemoryStore::new();
        ChosenLocation::new(storage.clone())
            .set_chosen(GeoPoint::new(-33.9, 151.2).unwrap())
            .unwrap();

        let reopened = ChosenLocation::new(storage);
        assert_eq!(
            reopened.get_chosen(),
            Some(GeoPoint::new(-33.9, 151.2).unwrap())
        );
    }

    #[test]
    fn test_clear() {
        let chosen = ChosenLocation::new(MemoryStore::new());
        chosen.set_chosen(GeoPoint::new(1.0, 2.0).unwrap()).unwrap();
        chosen.clear().unwrap();
        assert_eq!(chosen.get_chosen(), None);
    }

    #[test]
    fn test_malformed_value_is_none() {
        let storage = MemoryStore::new();
        storage.put(CHOSEN_LOCATION_KEY, vec![1, 2]).unwrap();
        assert_eq!(ChosenLocation::new(storage).get_chosen(), None);
    }

    #[test]
    fn test_out_of_range_value_is_none() {
        let storage = MemoryStore::new();
        let stored = StoredPoint {
            latitude: 0.0,
            longitude: 500.0,
        };
        storage
            .put(CHOSEN_LOCATION_KEY, postcard::to_stdvec(&stored).unwrap())
            .unwrap();
        assert_eq!(ChosenLocation::new(storage).get_chosen(), None);
    }
}
