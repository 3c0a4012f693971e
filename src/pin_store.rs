//! Saved pin store
//!
//! `PinStore` owns the ordered, duplicate-free list of pins the user dropped
//! on the map. It persists coordinates after every add and remove and
//! broadcasts a `PinEvent` whenever the list changes, so a map view can
//! reconcile its annotations against `snapshot()` instead of keeping its own
//! copy.

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::models::{GeoPoint, PinMetadata, SavedPin, StoredPoint};
use crate::storage::{KeyValueStore, SAVED_LOCATIONS_KEY};
use crate::{Result, WeatherWearError};

const EVENT_CAPACITY: usize = 64;

/// Change notification for rendering collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinEvent {
    Added(GeoPoint),
    Removed(GeoPoint),
    MetadataAttached(GeoPoint),
    /// The whole list was replaced from durable storage
    Reloaded,
}

/// A failed write. The in-memory change it belongs to still stands.
#[derive(Debug)]
pub struct PersistWarning {
    pub error: WeatherWearError,
}

impl PersistWarning {
    #[must_use]
    pub fn user_message(&self) -> String {
        self.error.user_message()
    }
}

/// Outcome of an `add` or `remove`
#[derive(Debug)]
#[must_use]
pub struct PinChange {
    /// Whether the list changed
    pub changed: bool,
    /// Set when the change could not be written to storage
    pub warning: Option<PersistWarning>,
}

impl PinChange {
    fn unchanged() -> Self {
        Self {
            changed: false,
            warning: None,
        }
    }
}

pub struct PinStore<S> {
    storage: S,
    pins: Vec<SavedPin>,
    events: broadcast::Sender<PinEvent>,
}

impl<S: KeyValueStore> PinStore<S> {
    /// Create an empty store without reading storage
    pub fn new(storage: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            storage,
            pins: Vec::new(),
            events,
        }
    }

    /// Create a store and load the persisted pins
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Receive a `PinEvent` for every change from now on
    pub fn subscribe(&self) -> broadcast::Receiver<PinEvent> {
        self.events.subscribe()
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Never fails: unreadable or undecodable storage loads as empty, and
    /// entries that are out of range or repeat an earlier point are dropped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn load(&mut self) -> &[SavedPin] {
        self.pins = match self.storage.get(SAVED_LOCATIONS_KEY) {
            Ok(Some(bytes)) => decode_pins(&bytes),
            Ok(None) => {
                debug!("No saved pins");
                Vec::new()
            }
            Err(e) => {
                warn!("Treating unreadable saved pins as empty: {}", e);
                Vec::new()
            }
        };
        info!("Loaded {} saved pins", self.pins.len());
        self.notify(PinEvent::Reloaded);
        &self.pins
    }

    /// Append `point` unless it is already saved
    pub fn add(&mut self, point: GeoPoint) -> PinChange {
        if self.contains(point) {
            debug!("Pin {} already saved", point);
            return PinChange::unchanged();
        }
        self.pins.push(SavedPin::new(point));
        debug!("Added pin {}", point);
        self.notify(PinEvent::Added(point));
        self.persist_after_change()
    }

    /// Attach geocoded metadata to the pin at `point`.
    ///
    /// Returns true only when a pin's metadata actually changed. Returns false
    /// when no pin matches (e.g. it was removed while the lookup was in
    /// flight) and when the matching pin already carries identical metadata.
    pub fn attach_metadata(
        &mut self,
        point: GeoPoint,
        title: impl Into<String>,
        locality: impl Into<String>,
    ) -> bool {
        let metadata = PinMetadata::new(title, locality);
        let mut changed = false;
        for pin in self.pins.iter_mut().filter(|pin| pin.point == point) {
            if pin.metadata.as_ref() != Some(&metadata) {
                pin.metadata = Some(metadata.clone());
                changed = true;
            }
        }
        if changed {
            self.notify(PinEvent::MetadataAttached(point));
        } else {
            debug!("No metadata change for pin {}", point);
        }
        changed
    }

    /// Remove every pin at `point`
    pub fn remove(&mut self, point: GeoPoint) -> PinChange {
        let before = self.pins.len();
        self.pins.retain(|pin| pin.point != point);
        if self.pins.len() == before {
            return PinChange::unchanged();
        }
        debug!("Removed pin {}", point);
        self.notify(PinEvent::Removed(point));
        self.persist_after_change()
    }

    /// Read-only view of the current pins in save order
    #[must_use]
    pub fn snapshot(&self) -> &[SavedPin] {
        &self.pins
    }

    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.pins.iter().any(|pin| pin.point == point)
    }

    /// Write the current coordinates to storage
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn persist(&self) -> Result<()> {
        let stored: Vec<StoredPoint> = self.pins.iter().map(|pin| pin.point.into()).collect();
        let bytes = postcard::to_stdvec(&stored)
            .map_err(|e| WeatherWearError::storage_write(format!("encode saved pins: {e}")))?;
        self.storage.put(SAVED_LOCATIONS_KEY, bytes)
    }

    fn persist_after_change(&self) -> PinChange {
        let warning = self.persist().err().map(|error| {
            warn!("Failed to persist saved pins: {}", error);
            PersistWarning { error }
        });
        PinChange {
            changed: true,
            warning,
        }
    }

    fn notify(&self, event: PinEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}

fn decode_pins(bytes: &[u8]) -> Vec<SavedPin> {
    let stored: Vec<StoredPoint> = match postcard::from_bytes(bytes) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Discarding malformed saved pins: {}", e);
            return Vec::new();
        }
    };

    let mut pins: Vec<SavedPin> = Vec::with_capacity(stored.len());
    for entry in stored {
        match GeoPoint::try_from(entry) {
            Ok(point) if pins.iter().any(|pin| pin.point == point) => {
                warn!("Dropping duplicate saved pin {}", point);
            }
            Ok(point) => pins.push(SavedPin::new(point)),
            Err(e) => warn!("Dropping invalid saved pin: {}", e),
        }
    }
    pins
}
