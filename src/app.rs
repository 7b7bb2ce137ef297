//! Meal Prep App
//!
//! Landing page, then the tabbed plan viewer.

use leptos::prelude::*;
use mealprep_core::{seed, Tab, ToggleStore};
use reactive_stores::Store;

use crate::components::{
    Landing, NotesTab, OverviewTab, ShoppingListTab, SundayPrepTab, TabBar, ThisWeekTab,
};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let plan = match seed::mock_plan() {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("{}", e);
            return view! {
                <div class="load-error">
                    <h1>"Sunday Meal Prep"</h1>
                    <p class="muted">"The meal plan could not be loaded."</p>
                </div>
            }
            .into_any();
        }
    };
    if let Err(e) = plan.validate() {
        log::warn!("plan {} is inconsistent: {}", plan.id, e);
    }

    let toggles = ToggleStore::new(LocalStorage);
    provide_context(Store::new(AppState::load(&plan, &toggles)));
    provide_context(AppContext::new(plan, toggles));

    let (show_plan, set_show_plan) = signal(false);

    view! {
        {move || if show_plan.get() {
            view! { <MealPlanView /> }.into_any()
        } else {
            view! { <Landing on_open=move || set_show_plan.set(true) /> }.into_any()
        }}
    }
    .into_any()
}

/// Tab bar plus the active tab's content
#[component]
pub fn MealPlanView() -> impl IntoView {
    let active_tab = RwSignal::new(Tab::default());

    view! {
        <div class="plan-view">
            <TabBar active_tab=active_tab />

            <div class="tab-content">
                {move || match active_tab.get() {
                    Tab::Overview => view! { <OverviewTab /> }.into_any(),
                    Tab::Shopping => view! { <ShoppingListTab /> }.into_any(),
                    Tab::Prep => view! { <SundayPrepTab /> }.into_any(),
                    Tab::Week => view! { <ThisWeekTab /> }.into_any(),
                    Tab::Notes => view! { <NotesTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}
