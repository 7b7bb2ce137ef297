//! Collapse Toggle Component
//!
//! Chevron button shared by prep step and meal cards.

use leptos::prelude::*;
use mealprep_core::CollapseSet;

/// Collapses or expands the card with `id` in `collapsed`
#[component]
pub fn CollapseToggle(id: String, collapsed: RwSignal<CollapseSet>) -> impl IntoView {
    let check_id = id.clone();
    let is_collapsed = move || collapsed.with(|set| set.is_collapsed(&check_id));
    let is_collapsed_title = is_collapsed.clone();

    view! {
        <button
            class="collapse-btn"
            title=move || if is_collapsed_title() { "Expand" } else { "Collapse" }
            on:click=move |_| collapsed.update(|set| set.toggle(&id))
        >
            {move || if is_collapsed() { "▶" } else { "▼" }}
        </button>
    }
}
