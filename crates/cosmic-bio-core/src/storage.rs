//! Durable key-value storage for the persisted counter.
//!
//! The card only ever touches one slot, but the slot lives behind the
//! [`KeyValueStore`] trait so the desktop build can use redb while tests
//! and the fallback path use [`MemoryStore`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, TableDefinition};

use crate::error::BioError;
use crate::identifier::COUNTER_MODULUS;

/// Slot holding the sequential counter.
pub const COUNTER_KEY: &str = "zeo_uid";

// Table definitions
const SETTINGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("settings");

/// A string-to-string slot store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, BioError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), BioError>;
}

/// Shared handle to whichever store backs the session.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the settings table if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, BioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, BioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile store, used in tests and when the database cannot be opened.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BioError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BioError> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a stored counter. Anything that is not a decimal in range is `None`.
fn parse_counter(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|n| *n < COUNTER_MODULUS)
}

/// Restore the counter from `key`.
///
/// Missing, malformed or out-of-range values all yield 0; read errors are
/// logged and also yield 0.
pub fn load_persisted_counter(store: &dyn KeyValueStore, key: &str) -> u16 {
    match store.get(key) {
        Ok(Some(raw)) => parse_counter(&raw).unwrap_or_else(|| {
            tracing::debug!(key, raw = %raw, "Ignoring unparsable stored counter");
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!(key, "Failed to read stored counter: {}", e);
            0
        }
    }
}

/// Write the counter to `key` as a decimal string.
pub fn persist_counter(store: &dyn KeyValueStore, key: &str, n: u16) -> Result<(), BioError> {
    store.set(key, &n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("w".to_string()));
    }

    #[test]
    fn test_redb_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("nested/bio.redb")).unwrap();

        assert_eq!(storage.get(COUNTER_KEY).unwrap(), None);
        storage.set(COUNTER_KEY, "17").unwrap();
        assert_eq!(storage.get(COUNTER_KEY).unwrap(), Some("17".to_string()));
    }

    #[test]
    fn test_redb_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bio.redb");

        {
            let storage = Storage::new(&path).unwrap();
            persist_counter(&storage, COUNTER_KEY, 256).unwrap();
        }

        let storage = Storage::new(&path).unwrap();
        assert_eq!(load_persisted_counter(&storage, COUNTER_KEY), 256);
    }

    #[test]
    fn test_load_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(load_persisted_counter(&store, COUNTER_KEY), 0);
    }

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("0"), Some(0));
        assert_eq!(parse_counter(" 42\n"), Some(42));
        assert_eq!(parse_counter("9999"), Some(9999));
        assert_eq!(parse_counter("10000"), None);
        assert_eq!(parse_counter("-1"), None);
        assert_eq!(parse_counter("abc"), None);
        assert_eq!(parse_counter(""), None);
    }
}
