//! Local Persistence
//!
//! JSON values in a string key-value store. The browser's `localStorage`
//! is used when available, otherwise an in-memory store that lives for the
//! page session.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// String key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Remove {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

thread_local! {
    static SESSION_FALLBACK: MemoryStorage = MemoryStorage::new();
}

/// Run `f` against the browser store, or the session fallback when the
/// browser store can't be opened.
pub fn with_store<R>(f: impl FnOnce(&dyn KeyValueStore) -> R) -> R {
    match BrowserStorage::open() {
        Ok(browser) => f(&browser),
        Err(e) => {
            log::warn!("{}; keeping state for this session only", e);
            SESSION_FALLBACK.with(|memory| f(memory))
        }
    }
}

/// Read `key`, falling back to `default` when it is missing or unreadable
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let Some(raw) = store.get(key) else {
        return default;
    };
    if raw.is_empty() {
        return default;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("stored {} is invalid ({}), using defaults", key, e);
            default
        }
    }
}

pub fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Remove `keys`; a key that can't be removed is logged and skipped
pub fn clear(store: &dyn KeyValueStore, keys: &[&str]) {
    for key in keys {
        if let Err(e) = store.remove(key) {
            log::warn!("{}", e);
        }
    }
}
