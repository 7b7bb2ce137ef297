//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the two
//! toggle collections.

use leptos::prelude::*;
use mealprep_core::{MealPlan, PrepStep, ShoppingItem, ToggleStore};
use reactive_stores::Store;

use crate::storage::LocalStorage;

/// Toggle collections with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping list with checked flags
    pub shopping_list: Vec<ShoppingItem>,
    /// Sunday prep timeline with completed flags
    pub prep_steps: Vec<PrepStep>,
}

impl AppState {
    /// Persisted collections where available, the plan's seed otherwise
    pub fn load(plan: &MealPlan, toggles: &ToggleStore<LocalStorage>) -> Self {
        Self {
            shopping_list: toggles.load_shopping_list(plan.shopping_list.clone()),
            prep_steps: toggles.load_prep_steps(plan.prep_steps.clone()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
// The toggle store saves the toggled collection it returns; the store is
// then set to that same collection.

/// Flip a shopping item and save the list
pub fn store_toggle_item(store: &AppStore, toggles: &ToggleStore<LocalStorage>, id: &str) {
    let next = toggles.toggle_shopping_item(&store.shopping_list().read_untracked(), id);
    *store.shopping_list().write() = next;
}

/// Flip a prep step and save the timeline
pub fn store_toggle_step(store: &AppStore, toggles: &ToggleStore<LocalStorage>, id: &str) {
    let next = toggles.toggle_prep_step(&store.prep_steps().read_untracked(), id);
    *store.prep_steps().write() = next;
}
