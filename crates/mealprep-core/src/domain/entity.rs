//! Domain Layer - Core Entity Traits
//!
//! Every plan entity is addressed by a string id. Entities carrying a
//! user-toggled flag additionally implement `Checkable`.

/// Core trait for all plan entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// An entity with a single boolean flag the user can flip
/// (`checked` on shopping items, `completed` on prep steps)
pub trait Checkable: Entity {
    fn is_done(&self) -> bool;

    fn set_done(&mut self, done: bool);
}

/// Flip the flag of exactly the entity whose id matches.
///
/// All other entities are cloned unchanged. An unknown id yields an
/// unchanged copy of the collection.
pub fn toggle<T: Checkable>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id() == id {
                let done = item.is_done();
                item.set_done(!done);
            }
            item
        })
        .collect()
}
