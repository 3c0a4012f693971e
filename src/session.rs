//! App session
//!
//! Ties the pin store, the chosen location, reverse geocoding and the
//! forecast service together in the order the map and weather screens use
//! them.

use futures::stream::{self, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::Result;
use crate::chosen_location::ChosenLocation;
use crate::forecast::{ForecastService, WeatherOutlook};
use crate::geocode::{ReverseGeocoder, resolve_metadata};
use crate::models::{GeoPoint, PLACEHOLDER_TEXT};
use crate::pin_store::{PinChange, PinEvent, PinStore};
use crate::storage::KeyValueStore;

/// Reverse geocode lookups in flight at once while restoring metadata
pub const MAX_CONCURRENT_LOOKUPS: usize = 2;

pub struct WeatherWear<S, G> {
    pins: PinStore<S>,
    chosen: ChosenLocation<S>,
    geocoder: G,
}

impl<S, G> WeatherWear<S, G>
where
    S: KeyValueStore + Clone,
    G: ReverseGeocoder,
{
    /// Open a session and load the saved pins.
    ///
    /// Metadata is not resolved yet; call `restore_metadata`.
    pub fn open(storage: S, geocoder: G) -> Self {
        Self {
            pins: PinStore::open(storage.clone()),
            chosen: ChosenLocation::new(storage),
            geocoder,
        }
    }

    #[must_use]
    pub fn pins(&self) -> &PinStore<S> {
        &self.pins
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PinEvent> {
        self.pins.subscribe()
    }

    /// Geocode every saved pin and attach what resolves.
    ///
    /// At most `MAX_CONCURRENT_LOOKUPS` lookups run at once. Returns the
    /// number of pins whose metadata changed.
    pub async fn restore_metadata(&mut self) -> usize {
        let geocoder = &self.geocoder;
        let points: Vec<GeoPoint> = self.pins.snapshot().iter().map(|pin| pin.point).collect();
        let resolved: Vec<_> = stream::iter(points)
            .map(|point| async move { (point, resolve_metadata(geocoder, point).await) })
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await;

        let mut attached = 0;
        for (point, metadata) in resolved {
            let Some(metadata) = metadata else { continue };
            if self
                .pins
                .attach_metadata(point, metadata.title, metadata.locality)
            {
                attached += 1;
            }
        }
        info!("Restored metadata for {} pins", attached);
        attached
    }

    /// Save a dropped pin, then look up its name
    pub async fn drop_pin(&mut self, point: GeoPoint) -> PinChange {
        let change = self.pins.add(point);
        if change.changed {
            if let Some(metadata) = resolve_metadata(&self.geocoder, point).await {
                self.pins
                    .attach_metadata(point, metadata.title, metadata.locality);
            }
        }
        change
    }

    /// Delete a pin
    pub fn delete_pin(&mut self, point: GeoPoint) -> PinChange {
        self.pins.remove(point)
    }

    /// Pick `point` for the forecast, replacing any earlier choice
    pub fn choose(&self, point: GeoPoint) -> Result<()> {
        self.chosen.set_chosen(point)
    }

    #[must_use]
    pub fn chosen(&self) -> Option<GeoPoint> {
        self.chosen.get_chosen()
    }

    /// Forecast outlook for the chosen location, `None` when nothing is chosen
    pub async fn outlook<F>(&self, forecast: &F) -> Result<Option<WeatherOutlook>>
    where
        F: ForecastService + ?Sized,
    {
        let Some(point) = self.chosen() else {
            debug!("No location chosen");
            return Ok(None);
        };

        let data = forecast.get_forecast(point).await?;
        let name = resolve_metadata(&self.geocoder, point)
            .await
            .map_or_else(|| PLACEHOLDER_TEXT.to_string(), |m| m.title);

        Ok(Some(WeatherOutlook::build(name, &data)))
    }
}
