//! Durable key-value storage
//!
//! Everything the app persists lives under a handful of flat keys. The
//! `KeyValueStore` trait is the port the pin store and the chosen location
//! accessor are built on; `FjallStore` is the on-disk implementation and
//! `MemoryStore` the in-process fake.

pub mod fjall_store;
pub mod memory;

pub use fjall_store::FjallStore;
pub use memory::MemoryStore;

use crate::Result;

/// Key holding the saved pin sequence
pub const SAVED_LOCATIONS_KEY: &str = "saved_locations";

/// Key holding the location picked for the forecast
pub const CHOSEN_LOCATION_KEY: &str = "chosen_location";

/// Flat byte-oriented key-value storage.
///
/// Reads fail with `WeatherWearError::StorageRead`, writes with
/// `WeatherWearError::StorageWrite`. Writes are synchronous: when `put`
/// returns `Ok` the value is visible to every handle on the same store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
