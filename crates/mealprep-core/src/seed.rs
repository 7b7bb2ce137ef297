//! Bundled mock plan

use crate::domain::MealPlan;
use crate::error::PlanResult;

const MOCK_PLAN_JSON: &str = include_str!("../data/mock_plan.json");

/// The week of Nov 10, 2025 sample plan shipped with the app
pub fn mock_plan() -> PlanResult<MealPlan> {
    parse_plan(MOCK_PLAN_JSON)
}

/// Parse a plan from its JSON representation
pub fn parse_plan(json: &str) -> PlanResult<MealPlan> {
    Ok(serde_json::from_str(json)?)
}
