//! Best-score persistence
//!
//! The only thing the game remembers between sessions is a single integer,
//! stored as a decimal string under a fixed key. Storage backends:
//! - `MemoryStore`: tests and the native driver
//! - `platform::web::LocalStorage`: the browser (wasm32 only)

pub mod best;

pub use best::{BestScore, parse_best};

use std::collections::HashMap;

use thiserror::Error;

/// Errors from a key-value backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached (private mode, no window, ...)
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
