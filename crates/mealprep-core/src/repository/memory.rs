//! In-memory key-value store
//!
//! Used by tests and by hosts without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with a corrupted value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
