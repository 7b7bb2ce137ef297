//! Sunday Prep Tab Component
//!
//! The prep timeline: completable, collapsible step cards with highlighted
//! instructions.

use leptos::prelude::*;
use mealprep_core::{prep, CollapseSet, PrepStep};

use crate::components::{CollapseToggle, HighlightedText};
use crate::context::use_app_context;
use crate::store::{store_toggle_step, use_app_store, AppStateStoreFields};

#[component]
pub fn SundayPrepTab() -> impl IntoView {
    let store = use_app_store();
    let collapsed = RwSignal::new(CollapseSet::new());
    let progress = Memo::new(move |_| prep::progress(&store.prep_steps().read()));

    view! {
        <div class="tab-page prep">
            <div class="tab-header">
                <h1>"Sunday Prep Timeline"</h1>
                <span class=move || {
                    if progress.get().is_complete() { "counter done" } else { "counter" }
                }>
                    {move || progress.get().label()}
                </span>
            </div>
            <p class="muted">
                {move || format!("Follow these {} steps to prep your week.", progress.get().total)}
            </p>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.1}%", progress.get().ratio() * 100.0)
                ></div>
            </div>

            <div class="step-list">
                <For
                    each=move || store.prep_steps().get()
                    key=|step| (step.id.clone(), step.completed)
                    children=move |step| view! { <PrepStepCard step=step collapsed=collapsed /> }
                />
            </div>

            <div class="card tip">
                <h4>"Kitchen Mode"</h4>
                <p class="muted">
                    "Check off steps as you complete them. Collapse finished steps to reduce clutter while cooking."
                </p>
            </div>
        </div>
    }
}

/// A single step of the timeline
#[component]
fn PrepStepCard(step: PrepStep, collapsed: RwSignal<CollapseSet>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = step.id.clone();
    let completed = step.completed;
    let meta = step.summary().labels().join(" • ");
    let check_id = id.clone();
    let is_expanded = Memo::new(move |_| collapsed.with(|set| set.is_expanded(&check_id)));
    let body = StoredValue::new(step.clone());
    let toggle_id = id.clone();

    view! {
        <div class=if completed { "step-card completed" } else { "step-card" }>
            <div class="step-header">
                <button
                    class="step-checkbox"
                    on:click=move |_| store_toggle_step(&store, &ctx.toggles, &toggle_id)
                >
                    {if completed { "✓" } else { "" }}
                </button>
                <span class="step-number">{step.step_number.to_string()}</span>
                <div class="step-title">
                    <h3>{step.title}</h3>
                    <div class="muted step-meta">{meta}</div>
                </div>
                <CollapseToggle id=id collapsed=collapsed />
            </div>

            <Show when=move || is_expanded.get()>
                {move || body.with_value(step_body)}
            </Show>
        </div>
    }
}

/// Ingredients, equipment, instructions and tips of an expanded step
fn step_body(step: &PrepStep) -> impl IntoView {
    let ingredients = bullet_section("Ingredients", &step.ingredients);
    let equipment = bullet_section("Equipment", &step.equipment);
    let instructions = step
        .instructions
        .iter()
        .enumerate()
        .map(|(i, instruction)| {
            view! {
                <li class="instruction">
                    <span class="instruction-number">{(i + 1).to_string()}</span>
                    <p><HighlightedText text=instruction.clone() /></p>
                </li>
            }
        })
        .collect_view();
    let tips = (!step.tips().is_empty()).then(|| {
        let paragraphs = step
            .tips()
            .iter()
            .map(|tip| view! { <p class="muted">{tip.clone()}</p> })
            .collect_view();
        view! {
            <div class="pro-tips">
                <h4>"Pro Tips"</h4>
                {paragraphs}
            </div>
        }
    });

    view! {
        <div class="step-body">
            <div class="step-lists">
                {ingredients}
                {equipment}
            </div>
            <div class="step-instructions">
                <h4>"Instructions"</h4>
                <ol>{instructions}</ol>
                {tips}
            </div>
        </div>
    }
}

/// Titled bullet list, omitted when there is nothing to list
fn bullet_section(title: &'static str, entries: &[String]) -> Option<impl IntoView> {
    if entries.is_empty() {
        return None;
    }
    let rows = entries
        .iter()
        .map(|entry| view! { <li class="muted">{entry.clone()}</li> })
        .collect_view();
    Some(view! {
        <div class="bullet-section">
            <h4>{title}</h4>
            <ul>{rows}</ul>
        </div>
    })
}
