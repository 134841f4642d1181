//! Standard / alternate basemap switch.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn BasemapToggle() -> Element {
    let mut state = use_context::<AppState>();
    let alternate = (state.alternate_basemap)();

    let on_change = move |_evt: Event<FormData>| {
        let current = (state.alternate_basemap)();
        state.alternate_basemap.set(!current);
    };

    rsx! {
        label {
            style: "font-weight: bold; display: flex; gap: 6px; align-items: center;",
            input {
                r#type: "checkbox",
                checked: alternate,
                onchange: on_change,
            }
            "Use Google Maps"
        }
    }
}
