//! Colour key for the selected species.

use crate::state::AppState;
use dioxus::prelude::*;

/// Four-column grid of round swatches with common and scientific names,
/// restricted to the current selection.
#[component]
pub fn SpeciesLegend() -> Element {
    let state = use_context::<AppState>();
    let entries = state.session().map(|s| s.legend()).unwrap_or_default();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px 16px;",
            for entry in entries.into_iter() {
                div {
                    key: "{entry.scientific_name}",
                    style: "display: flex; align-items: center; margin-bottom: 5px;",
                    div {
                        style: "width: 20px; height: 20px; background-color: {entry.color}; border-radius: 50%; margin-right: 8px; flex-shrink: 0;",
                    }
                    div {
                        "{entry.label}"
                        br {}
                        small { i { "{entry.scientific_name}" } }
                    }
                }
            }
        }
    }
}
