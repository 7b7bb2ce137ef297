//! Meal Plan Aggregate
//!
//! The weekly plan is an immutable snapshot. Only the checked/completed
//! flags of its shopping items and prep steps change at runtime, and those
//! live in the toggle store rather than here.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::prep_step::PrepStep;
use super::shopping_item::ShoppingItem;
use crate::error::{PlanError, PlanResult};

/// Number of meals a full week is expected to have
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightDish {
    pub name: String,
    pub description: String,
    pub cook_time: String,
}

/// A batch-prepped item reused by several meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub description: String,
    pub storage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekMeal {
    pub id: String,
    /// Weekday name, unique within a plan
    pub day: String,
    pub name: String,
    pub assembly_time: String,
    pub cooking_method: String,
    pub components: Vec<String>,
    pub fresh_ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl WeekMeal {
    /// Day badge text, e.g. "MON"
    pub fn day_abbr(&self) -> String {
        self.day.chars().take(3).collect::<String>().to_uppercase()
    }
}

impl Entity for WeekMeal {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Paragraphs
    pub content: Vec<String>,
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The full weekly meal-prep dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub philosophy: String,
    pub spotlight_dish: SpotlightDish,
    pub components: Vec<Component>,
    pub shopping_list: Vec<ShoppingItem>,
    pub prep_steps: Vec<PrepStep>,
    pub week_meals: Vec<WeekMeal>,
    pub notes: Vec<Note>,
}

impl MealPlan {
    /// Week bounds as shown in the overview badge, e.g. "Nov 10 - Nov 16"
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.week_start.format("%b %-d"),
            self.week_end.format("%b %-d")
        )
    }

    /// Check the id and ordering invariants consumers rely on.
    ///
    /// A week with other than seven meals is accepted; only duplicate days
    /// are rejected.
    pub fn validate(&self) -> PlanResult<()> {
        ensure_unique_ids("shopping item", &self.shopping_list)?;
        ensure_unique_ids("prep step", &self.prep_steps)?;
        ensure_unique_ids("meal", &self.week_meals)?;
        ensure_unique_ids("note", &self.notes)?;

        for (index, step) in self.prep_steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.step_number != expected {
                return Err(PlanError::StepNumbering {
                    id: step.id.clone(),
                    expected,
                    found: step.step_number,
                });
            }
        }

        let mut days = HashSet::new();
        for meal in &self.week_meals {
            if !days.insert(meal.day.to_lowercase()) {
                return Err(PlanError::DuplicateDay(meal.day.clone()));
            }
        }

        if self.week_meals.len() != DAYS_PER_WEEK {
            log::info!(
                "plan {} has {} meals instead of {}",
                self.id,
                self.week_meals.len(),
                DAYS_PER_WEEK
            );
        }

        Ok(())
    }
}

fn ensure_unique_ids<T: Entity>(kind: &'static str, entities: &[T]) -> PlanResult<()> {
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(PlanError::DuplicateId {
                kind,
                id: entity.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::mock_plan;

    #[test]
    fn test_day_abbr() {
        let meal = WeekMeal {
            id: "meal-1".to_string(),
            day: "Monday".to_string(),
            name: "Black Bean Soup Bowls".to_string(),
            assembly_time: "10 min".to_string(),
            cooking_method: "Stovetop".to_string(),
            components: vec![],
            fresh_ingredients: vec![],
            instructions: vec![],
        };
        assert_eq!(meal.day_abbr(), "MON");
    }

    #[test]
    fn test_date_range_label() {
        let plan = mock_plan().expect("seed plan parses");
        assert_eq!(plan.date_range_label(), "Nov 10 - Nov 16");
    }

    #[test]
    fn test_validate_rejects_gap_in_step_numbers() {
        let mut plan = mock_plan().unwrap();
        plan.prep_steps.remove(1);

        match plan.validate() {
            Err(PlanError::StepNumbering { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected numbering error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_item_id() {
        let mut plan = mock_plan().unwrap();
        let dup = plan.shopping_list[0].clone();
        plan.shopping_list.push(dup);

        assert!(matches!(
            plan.validate(),
            Err(PlanError::DuplicateId { kind: "shopping item", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_repeated_day() {
        let mut plan = mock_plan().unwrap();
        plan.week_meals[1].day = "sunday".to_string();

        assert!(matches!(plan.validate(), Err(PlanError::DuplicateDay(_))));
    }
}
