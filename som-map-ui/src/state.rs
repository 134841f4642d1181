//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The observation set is shared and read-only; selection and basemap are
//! this session's own.

use dioxus::prelude::*;
use som_data::render::BasemapProvider;
use som_data::{ObservationSet, Session};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Shared application state for the species map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Observation set (None until loaded)
    pub dataset: Signal<Option<Arc<ObservationSet>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Scientific names currently selected; starts empty
    pub selected_species: Signal<BTreeSet<String>>,
    /// Use the alternate basemap tiles
    pub alternate_basemap: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_species: Signal::new(BTreeSet::new()),
            alternate_basemap: Signal::new(false),
        }
    }

    /// Snapshot of the current view state, or `None` before the set is loaded.
    ///
    /// Reading through this subscribes the caller to every signal involved.
    pub fn session(&self) -> Option<Session> {
        let set = self.dataset.read().clone()?;
        let mut session = Session::new(set);
        session.set_selection(self.selected_species.read().iter().cloned());
        session.set_basemap(BasemapProvider::from_alternate((self.alternate_basemap)()));
        Some(session)
    }

    pub fn toggle_species(&mut self, scientific_name: &str) {
        let mut selected = self.selected_species.write();
        if !selected.remove(scientific_name) {
            selected.insert(scientific_name.to_string());
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
