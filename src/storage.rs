//! Browser local storage adapter

use mealprep_core::KeyValueStore;

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, '{}' not saved", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::error!("failed to write '{}': {:?}", key, e);
        }
    }
}
