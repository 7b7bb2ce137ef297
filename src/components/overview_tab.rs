//! Overview Tab Component
//!
//! Week bounds, philosophy, spotlight dish and the core components.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn OverviewTab() -> impl IntoView {
    let plan = use_app_context().plan.get_value();
    let date_range = plan.date_range_label();
    let spotlight = plan.spotlight_dish;

    let components = plan
        .components
        .into_iter()
        .map(|component| {
            view! {
                <div class="card component-card">
                    <h3>{component.name}</h3>
                    <p class="muted">{component.description}</p>
                    <div class="muted storage">{component.storage}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tab-page overview">
            <div class="week-header">
                <span class="pill">{date_range}</span>
                <h1>"This Week's Plan"</h1>
                <p class="muted">{plan.philosophy}</p>
            </div>

            <div class="card spotlight">
                <span class="pill">"Sunday Spotlight"</span>
                <h2>{spotlight.name}</h2>
                <p class="muted">{spotlight.description}</p>
                <span class="muted">{spotlight.cook_time}</span>
            </div>

            <h2>"Core Components"</h2>
            <div class="component-grid">{components}</div>
        </div>
    }
}
