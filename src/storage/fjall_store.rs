use std::path::Path;

use fjall::{Database, Keyspace, PersistMode};
use tracing::debug;

use super::KeyValueStore;
use crate::{Result, WeatherWearError};

const KEYSPACE_NAME: &str = "weatherwear";

/// `KeyValueStore` backed by an embedded fjall database.
///
/// Cloning is cheap and every clone sees the same data. Every write is
/// synced to disk before it returns.
#[derive(Clone)]
pub struct FjallStore {
    db: Database,
    store: Keyspace,
}

impl FjallStore {
    /// Opens (or creates) the database in `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Database::builder(path).open().map_err(|e| {
            WeatherWearError::storage_read(format!(
                "failed to open database at {}: {e}",
                path.display()
            ))
        })?;
        let store = db
            .keyspace(KEYSPACE_NAME, fjall::KeyspaceCreateOptions::default)
            .map_err(|e| {
                WeatherWearError::storage_read(format!("failed to open keyspace: {e}"))
            })?;
        debug!("Opened storage at {}", path.display());
        Ok(FjallStore { db, store })
    }

    fn sync(&self, key: &str) -> Result<()> {
        self.db
            .persist(PersistMode::SyncAll)
            .map_err(|e| WeatherWearError::storage_write(format!("sync `{key}`: {e}")))
    }
}

impl KeyValueStore for FjallStore {
    #[tracing::instrument(name = "storage_get", level = "debug", skip(self))]
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .store
            .get(key.as_bytes())
            .map_err(|e| WeatherWearError::storage_read(format!("get `{key}`: {e}")))?;
        Ok(value.map(|v| v.to_vec()))
    }

    #[tracing::instrument(name = "storage_put", level = "debug", skip(self, value))]
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.store
            .insert(key.as_bytes(), value)
            .map_err(|e| WeatherWearError::storage_write(format!("put `{key}`: {e}")))?;
        self.sync(key)
    }

    #[tracing::instrument(name = "storage_remove", level = "debug", skip(self))]
    fn remove(&self, key: &str) -> Result<()> {
        self.store
            .remove(key.as_bytes())
            .map_err(|e| WeatherWearError::storage_write(format!("remove `{key}`: {e}")))?;
        self.sync(key)
    }
}
