//! Highlighted Text Component
//!
//! Renders an instruction with temperatures, durations, quantities and
//! cooking verbs emphasized.

use leptos::prelude::*;
use mealprep_core::{annotate, Highlight};

#[component]
pub fn HighlightedText(text: String) -> impl IntoView {
    annotate(&text)
        .into_iter()
        .map(|fragment| {
            let part = fragment.text.to_string();
            match fragment.highlight {
                Highlight::Plain => part.into_any(),
                Highlight::Verb => view! { <strong>{part}</strong> }.into_any(),
                other => view! { <span class=format!("hl-{}", other.as_str())>{part}</span> }
                    .into_any(),
            }
        })
        .collect_view()
}
