//! Application Context
//!
//! Shared, non-reactive dependencies provided via Leptos Context API.

use leptos::prelude::*;
use mealprep_core::{MealPlan, ToggleStore};

use crate::storage::LocalStorage;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The loaded plan, read-only for the whole session
    pub plan: StoredValue<MealPlan>,
    /// Persistence for checked items and completed steps
    pub toggles: ToggleStore<LocalStorage>,
}

impl AppContext {
    pub fn new(plan: MealPlan, toggles: ToggleStore<LocalStorage>) -> Self {
        Self {
            plan: StoredValue::new(plan),
            toggles,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
