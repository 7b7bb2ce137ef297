//! Prep Step Entity
//!
//! A timed block of the Sunday prep session.

use serde::{Deserialize, Serialize};

use super::entity::{Checkable, Entity};

/// One step of the Sunday prep timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepStep {
    pub id: String,
    /// 1-based position in the timeline
    pub step_number: u32,
    pub title: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_tasks: Option<Vec<String>>,
    pub ingredients: Vec<String>,
    pub equipment: Vec<String>,
    pub instructions: Vec<String>,
    /// Pro tips shown under the instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    pub completed: bool,
}

/// Header metadata of a step card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary<'a> {
    pub duration: &'a str,
    pub parallel_tasks: &'a [String],
    pub ingredient_count: usize,
    pub equipment_count: usize,
}

impl StepSummary<'_> {
    /// Metadata labels in display order, e.g. `["10 min", "3 ingredients", "2 tools"]`
    pub fn labels(&self) -> Vec<String> {
        let mut labels = vec![self.duration.to_string()];
        labels.extend(self.parallel_tasks.iter().cloned());
        if self.ingredient_count > 0 {
            labels.push(format!("{} ingredients", self.ingredient_count));
        }
        if self.equipment_count > 0 {
            labels.push(format!("{} tools", self.equipment_count));
        }
        labels
    }
}

impl PrepStep {
    pub fn summary(&self) -> StepSummary<'_> {
        StepSummary {
            duration: &self.duration,
            parallel_tasks: self.parallel_tasks.as_deref().unwrap_or_default(),
            ingredient_count: self.ingredients.len(),
            equipment_count: self.equipment.len(),
        }
    }

    /// Pro tips, empty when the step has none
    pub fn tips(&self) -> &[String] {
        self.notes.as_deref().unwrap_or_default()
    }
}

impl Entity for PrepStep {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Checkable for PrepStep {
    fn is_done(&self) -> bool {
        self.completed
    }

    fn set_done(&mut self, done: bool) {
        self.completed = done;
    }
}
