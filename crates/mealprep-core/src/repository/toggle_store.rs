//! Persisted Toggle Store
//!
//! Keeps the shopping list and the prep steps across reloads. A stored
//! collection replaces the seed collection wholesale; there is no
//! field-level merge and no reconciliation with a newer seed plan.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;
use crate::domain::{PrepStep, ShoppingItem};
use crate::error::{StoreError, StoreResult};
use crate::{prep, shopping};

pub const SHOPPING_LIST_KEY: &str = "shoppingList";
pub const PREP_STEPS_KEY: &str = "sundayPrepSteps";

/// Storage keys of the two toggle collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub shopping_list: &'static str,
    pub prep_steps: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            shopping_list: SHOPPING_LIST_KEY,
            prep_steps: PREP_STEPS_KEY,
        }
    }
}

/// Durable checked/completed state over an injected key-value store
#[derive(Debug, Clone, Copy)]
pub struct ToggleStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> ToggleStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Read the collection stored under `key`.
    ///
    /// `Ok(None)` when nothing was stored, `Err` when the stored value does
    /// not parse as a collection of `T`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<Vec<T>>> {
        let Some(raw) = self.store.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                key: key.to_string(),
                source,
            })
    }

    /// Stored collection if present and valid, otherwise `seed`.
    ///
    /// Parse failures are logged and never returned.
    pub fn load<T: DeserializeOwned>(&self, key: &str, seed: Vec<T>) -> Vec<T> {
        match self.try_load(key) {
            Ok(Some(stored)) => {
                log::debug!("restored {} entries from '{}'", stored.len(), key);
                stored
            }
            Ok(None) => seed,
            Err(e) => {
                log::warn!("{}; using seed data", e);
                seed
            }
        }
    }

    /// Serialize the full collection under `key`, overwriting prior contents
    pub fn try_save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw);
        log::debug!("saved {} entries to '{}'", items.len(), key);
        Ok(())
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = self.try_save(key, items) {
            log::error!("{}", e);
        }
    }

    pub fn load_shopping_list(&self, seed: Vec<ShoppingItem>) -> Vec<ShoppingItem> {
        self.load(self.keys.shopping_list, seed)
    }

    pub fn save_shopping_list(&self, items: &[ShoppingItem]) {
        self.save(self.keys.shopping_list, items)
    }

    pub fn load_prep_steps(&self, seed: Vec<PrepStep>) -> Vec<PrepStep> {
        self.load(self.keys.prep_steps, seed)
    }

    pub fn save_prep_steps(&self, steps: &[PrepStep]) {
        self.save(self.keys.prep_steps, steps)
    }

    /// Flip the item with `id` and persist the resulting list.
    ///
    /// The saved value is always the returned list; an unknown id saves the
    /// list unchanged.
    pub fn toggle_shopping_item(&self, items: &[ShoppingItem], id: &str) -> Vec<ShoppingItem> {
        let next = shopping::toggle(items, id);
        self.save_shopping_list(&next);
        next
    }

    /// Flip the step with `id` and persist the resulting timeline
    pub fn toggle_prep_step(&self, steps: &[PrepStep], id: &str) -> Vec<PrepStep> {
        let next = prep::toggle_step(steps, id);
        self.save_prep_steps(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::repository::MemoryStore;

    fn seed_items() -> Vec<ShoppingItem> {
        vec![
            ShoppingItem::new("a", "Milk", "1 qt", Category::Dairy),
            ShoppingItem::new("b", "Garlic", "1 head", Category::Produce),
        ]
    }

    #[test]
    fn test_absent_key_uses_seed() {
        let store = ToggleStore::new(MemoryStore::new());
        assert_eq!(store.load_shopping_list(seed_items()), seed_items());
    }

    #[test]
    fn test_stored_collection_replaces_seed_entirely() {
        let backing = MemoryStore::new();
        let store = ToggleStore::new(&backing);
        let saved = vec![ShoppingItem {
            checked: true,
            ..ShoppingItem::new("z", "Tortillas", "12", Category::Pantry)
        }];
        store.save_shopping_list(&saved);

        assert_eq!(store.load_shopping_list(seed_items()), saved);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_seed() {
        let store = ToggleStore::new(MemoryStore::with_entry(SHOPPING_LIST_KEY, "{not json"));

        assert!(matches!(
            store.try_load::<ShoppingItem>(SHOPPING_LIST_KEY),
            Err(StoreError::Parse { .. })
        ));
        assert_eq!(store.load_shopping_list(seed_items()), seed_items());
    }

    #[test]
    fn test_wrong_shape_is_a_parse_failure() {
        let store = ToggleStore::new(MemoryStore::with_entry(SHOPPING_LIST_KEY, r#"{"id":"a"}"#));
        assert_eq!(store.load_shopping_list(seed_items()), seed_items());
    }

    #[test]
    fn test_collections_use_independent_keys() {
        let backing = MemoryStore::new();
        let store = ToggleStore::new(&backing);
        store.save_shopping_list(&seed_items());
        store.save_prep_steps(&[]);

        assert_eq!(backing.len(), 2);
        assert!(backing.get(SHOPPING_LIST_KEY).unwrap().starts_with('['));
        assert_eq!(backing.get(PREP_STEPS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_custom_keys() {
        let backing = MemoryStore::new();
        let keys = StorageKeys {
            shopping_list: "week-46:shopping",
            prep_steps: "week-46:prep",
        };
        let store = ToggleStore::with_keys(&backing, keys);
        store.save_shopping_list(&seed_items());

        assert!(backing.get("week-46:shopping").is_some());
        assert!(backing.get(SHOPPING_LIST_KEY).is_none());
    }

    fn stored_items(backing: &MemoryStore) -> Vec<ShoppingItem> {
        serde_json::from_str(&backing.get(SHOPPING_LIST_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_toggle_item_saves_toggled_list() {
        let backing = MemoryStore::new();
        let store = ToggleStore::new(&backing);

        let next = store.toggle_shopping_item(&seed_items(), "b");

        assert!(next[1].checked);
        let saved = stored_items(&backing);
        assert_eq!(saved, next);
        assert!(!saved[0].checked);
        assert!(saved[1].checked);
    }

    #[test]
    fn test_toggle_unknown_item_saves_unchanged_list() {
        let backing = MemoryStore::new();
        let store = ToggleStore::new(&backing);

        let next = store.toggle_shopping_item(&seed_items(), "nope");

        assert_eq!(next, seed_items());
        assert_eq!(stored_items(&backing), seed_items());
    }

    #[test]
    fn test_toggle_step_saves_completed_flag() {
        let backing = MemoryStore::new();
        let store = ToggleStore::new(&backing);
        let steps = crate::seed::mock_plan().unwrap().prep_steps;

        let once = store.toggle_prep_step(&steps, "step-2");
        let stored: Vec<PrepStep> =
            serde_json::from_str(&backing.get(PREP_STEPS_KEY).unwrap()).unwrap();
        assert!(stored[1].completed);
        assert_eq!(stored, once);

        // a second toggle overwrites with the restored timeline
        store.toggle_prep_step(&once, "step-2");
        assert_eq!(store.load_prep_steps(Vec::new()), steps);
    }
}
