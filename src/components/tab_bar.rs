//! Tab Bar Component
//!
//! Navigation between the plan views.

use leptos::prelude::*;
use mealprep_core::Tab;

/// Tab Bar component
#[component]
pub fn TabBar(active_tab: RwSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let tab_class = move || {
                        if active_tab.get() == tab { "tab active" } else { "tab" }
                    };

                    view! {
                        <button
                            id=format!("tab-{}", tab.id())
                            class=tab_class
                            on:click=move |_| active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
