//! Multi-select list of available species.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox list built from the availability index, ordered by display label.
/// Nothing is selected initially.
#[component]
pub fn SpeciesSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options: Vec<(String, String)> = match &*state.dataset.read() {
        Some(set) => set
            .index
            .menu_options()
            .into_iter()
            .map(|s| (s.scientific_name.clone(), s.display_label.clone()))
            .collect(),
        None => Vec::new(),
    };
    let selected = state.selected_species.read().clone();
    let selected_count = selected.len();

    let on_clear = move |_evt: Event<MouseData>| {
        state.selected_species.write().clear();
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 4px;",
                label {
                    style: "font-weight: bold;",
                    "Select species to display"
                }
                if selected_count > 0 {
                    button {
                        style: "font-size: 12px;",
                        onclick: on_clear,
                        "Clear ({selected_count})"
                    }
                }
            }
            div {
                style: "max-height: 220px; overflow-y: auto; border: 1px solid #ccc; border-radius: 4px; padding: 4px 8px;",
                for (scientific_name, label) in options.into_iter() {
                    SpeciesOption {
                        key: "{scientific_name}",
                        checked: selected.contains(&scientific_name),
                        scientific_name: scientific_name.clone(),
                        label: label.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpeciesOptionProps {
    scientific_name: String,
    label: String,
    checked: bool,
}

#[component]
fn SpeciesOption(props: SpeciesOptionProps) -> Element {
    let mut state = use_context::<AppState>();
    let name = props.scientific_name.clone();

    let on_change = move |_evt: Event<FormData>| {
        state.toggle_species(&name);
    };

    rsx! {
        label {
            style: "display: block; padding: 2px 0; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.label}"
        }
    }
}
