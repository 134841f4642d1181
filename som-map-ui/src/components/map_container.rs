//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet renders into
    pub id: String,
    /// Map height in pixels
    #[props(default = 800)]
    pub height: u32,
}

/// A fixed-height container div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
