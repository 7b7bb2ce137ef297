//! Notes Tab Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotesTab() -> impl IntoView {
    let notes = use_app_context().plan.with_value(|plan| plan.notes.clone());

    view! {
        <div class="tab-page notes">
            <h1>"Notes & Tips"</h1>
            <p class="muted">
                "Additional strategies, storage recommendations, and ideas for getting the most out of your meal prep."
            </p>

            {notes
                .into_iter()
                .map(|note| {
                    view! {
                        <div class="card note">
                            <h3>{note.title}</h3>
                            {note
                                .content
                                .into_iter()
                                .map(|paragraph| view! { <p class="muted">{paragraph}</p> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
