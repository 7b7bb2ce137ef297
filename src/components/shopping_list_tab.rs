//! Shopping List Tab Component
//!
//! Searchable, category-grouped shopping list with persisted checkboxes.

use leptos::prelude::*;
use mealprep_core::shopping::CategoryGroup;
use mealprep_core::{ShoppingItem, ShoppingListView};

use crate::context::use_app_context;
use crate::store::{store_toggle_item, use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingListTab() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let list_view = Memo::new(move |_| {
        ShoppingListView::build(&store.shopping_list().read(), &query.read())
    });

    view! {
        <div class="tab-page shopping">
            <div class="tab-header">
                <h1>"Shopping List"</h1>
                <span class="counter">{move || list_view.with(|v| v.overall.label())}</span>
            </div>
            <p class="muted">
                "Everything you need for this week's meal prep. Check items off as you shop."
            </p>

            <input
                type="text"
                class="search"
                placeholder="Search items..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <For
                each=move || list_view.with(|v| v.groups.clone())
                key=|group| {
                    // Checked flags are part of the key so toggles re-render the section
                    (
                        group.category,
                        group
                            .items
                            .iter()
                            .map(|item| (item.id.clone(), item.checked))
                            .collect::<Vec<_>>(),
                    )
                }
                children=move |group| view! { <CategorySection group=group /> }
            />

            {move || match list_view.with(|v| v.summary()) {
                None => view! {
                    <div class="empty-state">
                        <h3>"No items found"</h3>
                        <p class="muted">"Try adjusting your search or clear filters"</p>
                    </div>
                }
                .into_any(),
                Some(overall) => view! {
                    <div class="card progress-summary">
                        <div class="progress-caption">
                            <span class="muted">"Shopping Progress"</span>
                            <span>{format!("{}%", overall.percent().unwrap_or(0))}</span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style=format!("width: {:.1}%", overall.ratio() * 100.0)
                            ></div>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// One category heading with its items
#[component]
fn CategorySection(group: CategoryGroup) -> impl IntoView {
    let counter = group.progress().label();

    view! {
        <section class="category-section">
            <div class="category-header">
                <h3>{group.category.as_str()}</h3>
                <span class="muted">{counter}</span>
            </div>
            <div class="category-items">
                {group
                    .items
                    .into_iter()
                    .map(|item| view! { <ShoppingItemRow item=item /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ShoppingItemRow(item: ShoppingItem) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let id = item.id;
    let checked = item.checked;
    let quantity = (!item.quantity.is_empty())
        .then(|| view! { <span class="quantity-badge">{item.quantity}</span> });

    view! {
        <label class=if checked { "shopping-item checked" } else { "shopping-item" }>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| store_toggle_item(&store, &ctx.toggles, &id)
            />
            <span class="item-name">{item.name}</span>
            {quantity}
        </label>
    }
}
