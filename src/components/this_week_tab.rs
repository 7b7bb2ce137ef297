//! This Week Tab Component
//!
//! One collapsible card per day's meal.

use leptos::prelude::*;
use mealprep_core::{CollapseSet, WeekMeal};

use crate::components::CollapseToggle;
use crate::context::use_app_context;

#[component]
pub fn ThisWeekTab() -> impl IntoView {
    let meals = use_app_context().plan.with_value(|plan| plan.week_meals.clone());
    let collapsed = RwSignal::new(CollapseSet::new());

    view! {
        <div class="tab-page week">
            <h1>"This Week's Meals"</h1>
            <p class="muted">
                "Seven meals from Sunday through Saturday using your prep components. Most meals take 10-20 minutes to assemble."
            </p>

            <div class="meal-list">
                {meals
                    .into_iter()
                    .map(|meal| view! { <MealCard meal=meal collapsed=collapsed /> })
                    .collect_view()}
            </div>

            <div class="card tip">
                <h4>"Flexible Scheduling"</h4>
                <p class="muted">
                    "Cook these meals in any order throughout the week. Collapse meals you've already had to reduce clutter."
                </p>
            </div>
        </div>
    }
}

#[component]
fn MealCard(meal: WeekMeal, collapsed: RwSignal<CollapseSet>) -> impl IntoView {
    let check_id = meal.id.clone();
    let is_expanded = Memo::new(move |_| collapsed.with(|set| set.is_expanded(&check_id)));
    let day_abbr = meal.day_abbr();
    let meta = format!("{} • {}", meal.assembly_time, meal.cooking_method);
    let body = StoredValue::new(meal.clone());

    view! {
        <div class="meal-card">
            <div class="meal-header">
                <span class="day-badge">{day_abbr}</span>
                <div class="meal-title">
                    <div class="muted">{meal.day}</div>
                    <h3>{meal.name}</h3>
                </div>
                <span class="muted meal-meta">{meta}</span>
                <CollapseToggle id=meal.id collapsed=collapsed />
            </div>

            <Show when=move || is_expanded.get()>
                {move || body.with_value(meal_body)}
            </Show>
        </div>
    }
}

fn meal_body(meal: &WeekMeal) -> impl IntoView {
    let components = meal
        .components
        .iter()
        .map(|component| view! { <li class="component-chip">{component.clone()}</li> })
        .collect_view();
    let fresh = (!meal.fresh_ingredients.is_empty()).then(|| {
        let rows = meal
            .fresh_ingredients
            .iter()
            .map(|ingredient| view! { <li class="muted">{ingredient.clone()}</li> })
            .collect_view();
        view! {
            <div class="bullet-section">
                <h4>"Fresh Ingredients"</h4>
                <ul>{rows}</ul>
            </div>
        }
    });
    let instructions = meal
        .instructions
        .iter()
        .enumerate()
        .map(|(i, instruction)| {
            view! {
                <li class="instruction">
                    <span class="instruction-number">{(i + 1).to_string()}</span>
                    <p class="muted">{instruction.clone()}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="meal-body">
            <div class="meal-lists">
                <div class="bullet-section">
                    <h4>"From Sunday Prep"</h4>
                    <ul>{components}</ul>
                </div>
                {fresh}
            </div>
            <div class="meal-instructions">
                <h4>"Assembly Instructions"</h4>
                <ol>{instructions}</ol>
            </div>
        </div>
    }
}
