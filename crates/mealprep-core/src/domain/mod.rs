//! Domain Layer
//!
//! Plan entities and the traits shared by the toggleable ones.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
mod plan;
mod prep_step;
mod shopping_item;

pub use entity::{toggle, Checkable, Entity};
pub use plan::{Component, MealPlan, Note, SpotlightDish, WeekMeal, DAYS_PER_WEEK};
pub use prep_step::{PrepStep, StepSummary};
pub use shopping_item::{Category, ShoppingItem};
