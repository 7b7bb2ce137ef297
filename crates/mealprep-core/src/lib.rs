//! Meal Prep Core
//!
//! Browser-independent half of the Sunday meal prep viewer:
//! - domain: plan entities (shopping items, prep steps, meals, notes)
//! - repository: key-value storage and the persisted toggle store
//! - shopping / prep: view-models over the two toggle collections
//! - annotate: instruction highlighting
//! - collapse / tabs: view-local UI state

pub mod annotate;
pub mod collapse;
pub mod domain;
pub mod error;
pub mod prep;
pub mod progress;
pub mod repository;
pub mod seed;
pub mod shopping;
pub mod tabs;

pub use annotate::{annotate, Fragment, Highlight};
pub use collapse::CollapseSet;
pub use domain::{Category, Checkable, Entity, MealPlan, Note, PrepStep, ShoppingItem, WeekMeal};
pub use error::{PlanError, StoreError};
pub use progress::Progress;
pub use repository::{KeyValueStore, MemoryStore, StorageKeys, ToggleStore};
pub use shopping::ShoppingListView;
pub use tabs::Tab;
