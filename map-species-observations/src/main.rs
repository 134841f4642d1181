//! Species Observations Map
//!
//! Shows research-grade species observations as colour-coded, clustered
//! markers on a Leaflet map. The user picks species from a multi-select
//! list; nothing is shown until at least one species is selected.
//!
//! Data flow:
//! 1. `build.rs` copies `species_list.csv` and `species_observations.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds these CSVs into the WASM binary.
//! 3. On mount, the CSVs go through the load, enrich and index pipeline once;
//!    the resulting observation set is held in a `SourceCache`.
//! 4. Whenever the selection or basemap changes, the map view is rebuilt from
//!    the cached set and handed to Leaflet.

use dioxus::prelude::*;
use som_data::SourceCache;
use som_map_ui::components::{
    BasemapToggle, ErrorDisplay, LoadingSpinner, MapContainer, ObservationSummary, PageHeader,
    SpeciesLegend, SpeciesSelector,
};
use som_map_ui::js_bridge;
use som_map_ui::state::AppState;
use som_species::config::PipelineConfig;
use som_species::sources::SourceText;

/// Species metadata (genus, species, common name).
const SPECIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/species_list.csv"));
/// Observation records.
const OBSERVATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/species_observations.csv"));

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "species-map";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("species-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let cache = use_context_provider(|| SourceCache::new(PipelineConfig::default()));

    // Build the observation set once on mount
    use_effect(move || {
        let sources = SourceText::embedded(SPECIES_CSV, OBSERVATIONS_CSV);
        match cache.get_or_load(&sources) {
            Ok(set) => {
                let report = &set.report;
                log::info!(
                    "[SOM] app: {} species available; skipped {} species rows, {} observation rows; {} without coordinates; {} unmatched species",
                    set.index.len(),
                    report.load.species_skipped,
                    report.load.observations_skipped,
                    report.missing_coordinates,
                    report.unmatched_species.len()
                );
                state.dataset.set(Some(set));
            }
            Err(e) => {
                log::error!("[SOM] app: failed to load observations: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load observation data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Redraw the map whenever selection or basemap changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let Some(session) = state.session() else {
            return;
        };

        js_bridge::init_map_scripts();
        match session.map_view_json() {
            Ok(view_json) => {
                log::debug!(
                    "[SOM] app: rendering {} selected species",
                    session.selected().len()
                );
                js_bridge::render_species_map(MAP_ID, &view_json);
            }
            Err(e) => log::error!("[SOM] app: failed to serialize map view: {}", e),
        }
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();

    rsx! {
        document::Stylesheet { href: "{LEAFLET_CSS}" }
        document::Stylesheet { href: "{CLUSTER_CSS}" }
        document::Stylesheet { href: "{CLUSTER_DEFAULT_CSS}" }
        document::Script { src: "{LEAFLET_JS}" }
        document::Script { src: "{CLUSTER_JS}" }

        div {
            style: "font-family: sans-serif; max-width: 1200px; margin: 0 auto; padding: 16px;",
            PageHeader { title: "Species Observations Map".to_string() }

            if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if loading {
                LoadingSpinner {}
            } else {
                SpeciesSelector {}
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin: 8px 0;",
                    ObservationSummary {}
                    BasemapToggle {}
                }
                PageHeader { title: "Observation Map".to_string(), section: true }
                MapContainer { id: MAP_ID.to_string() }
                PageHeader { title: "Species Color Legend".to_string(), section: true }
                SpeciesLegend {}
            }
        }
    }
}
