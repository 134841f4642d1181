//! Counter line above the map.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ObservationSummary() -> Element {
    let state = use_context::<AppState>();
    let Some(session) = state.session() else {
        return rsx! {};
    };
    let summary = session.summary();

    rsx! {
        p {
            style: "margin: 0; font-size: 14px;",
            "{summary}"
        }
    }
}
