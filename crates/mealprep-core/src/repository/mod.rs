//! Repository Layer
//!
//! Key-value storage abstraction and the toggle store built on it.

mod memory;
mod toggle_store;
mod traits;

pub use memory::MemoryStore;
pub use toggle_store::{StorageKeys, ToggleStore, PREP_STEPS_KEY, SHOPPING_LIST_KEY};
pub use traits::KeyValueStore;
