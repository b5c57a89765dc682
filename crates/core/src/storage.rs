//! Persistent client key-value storage
//!
//! The desktop counterpart of browser local storage: string values by key.
//! [`FileStorage`] keeps every key in one JSON object on disk and rewrites
//! it on each mutation; [`MemoryStorage`] is the in-process variant.

use crate::error::{ShopError, ShopResult, StorageResultExt};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{debug, warn};

/// Key holding the bearer token
pub const TOKEN_KEY: &str = "champa_token";

/// Key holding the JSON array of locally added products
pub const ADDED_PRODUCTS_KEY: &str = "champa_added_products";

/// A string key-value store that outlives the process
pub trait ClientStorage: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> ShopResult<()>;

    /// Delete a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> ShopResult<()>;
}

/// Shared handle to a storage backend
pub type SharedStorage = Arc<dyn ClientStorage>;

/// Decode a JSON value from a store; undecodable data counts as absent
pub fn read_json<T: DeserializeOwned>(storage: &dyn ClientStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    serde_json::from_str(&raw)
        .map_err(|e| warn!("Ignoring corrupt value under '{key}': {e}"))
        .ok()
}

/// Encode a JSON value into a store
pub fn write_json<T: Serialize>(storage: &dyn ClientStorage, key: &str, value: &T) -> ShopResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// In-memory storage
// ============================================================================

/// Volatile storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        lock(&self.values).remove(key);
        Ok(())
    }
}

// ============================================================================
// File storage
// ============================================================================

/// Storage persisted as one JSON object in a file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`
    ///
    /// An unreadable or corrupt file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Storage file {} is corrupt, starting empty: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Cannot read storage file {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        debug!("Opened storage {} with {} keys", path.display(), values.len());
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Create a shared handle
    pub fn shared(path: impl Into<PathBuf>) -> SharedStorage {
        Arc::new(Self::open(path))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> ShopResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).at_path(parent)?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|e| ShopError::Storage {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).at_path(&self.path)
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        let mut values = lock(&self.values);
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        let mut values = lock(&self.values);
        if values.remove(key).is_some() {
            self.flush(&values)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
