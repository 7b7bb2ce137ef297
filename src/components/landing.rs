//! Landing Page Component

use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "Sunday Prep",
        "Follow a detailed step-by-step timeline with ingredients, equipment, and pro tips.",
    ),
    (
        "Smart Shopping",
        "Categorized shopping list with persistent checkboxes, so you never forget an ingredient.",
    ),
    (
        "Week of Meals",
        "Seven meals from Sunday to Saturday using the same components for variety without repetition.",
    ),
];

/// Landing page with a single entry into the plan viewer
#[component]
pub fn Landing(on_open: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Sunday Meal Prep"</h1>
            <p class="muted">
                "A modular meal prep system for planning and executing Sunday batch cooking. "
                "Front-load 2 hours of work on Sunday, reduce weeknight cooking to 10-20 minute assembly."
            </p>

            <button class="primary-btn" on:click=move |_| on_open()>
                "View Mock Plan"
            </button>
            <p class="muted">"This is a prototype with static mock data."</p>

            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p class="muted">{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
