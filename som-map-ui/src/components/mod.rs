//! Reusable Dioxus RSX components for the species observations map.

mod basemap_toggle;
mod error_display;
mod loading_spinner;
mod map_container;
mod observation_summary;
mod page_header;
mod species_legend;
mod species_selector;

pub use basemap_toggle::BasemapToggle;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use observation_summary::ObservationSummary;
pub use page_header::PageHeader;
pub use species_legend::SpeciesLegend;
pub use species_selector::SpeciesSelector;
