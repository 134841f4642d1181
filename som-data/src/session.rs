//! Per-user view state over a shared observation set.

use crate::dataset::ObservationSet;
use crate::render::{legend_entries, map_view, summary_line, BasemapProvider, LegendEntry, MapView};
use crate::selection::select;
use som_db::models::EnrichedObservation;
use std::collections::BTreeSet;
use std::sync::Arc;

/// One user's selection and basemap choice.
///
/// The set is shared; selection and basemap belong to this session alone.
#[derive(Debug, Clone)]
pub struct Session {
    set: Arc<ObservationSet>,
    selected: BTreeSet<String>,
    basemap: BasemapProvider,
}

impl Session {
    /// A session starts with nothing selected and the standard basemap.
    pub fn new(set: Arc<ObservationSet>) -> Self {
        Self {
            set,
            selected: BTreeSet::new(),
            basemap: BasemapProvider::default(),
        }
    }

    pub fn dataset(&self) -> &ObservationSet {
        &self.set
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Replace the selection. Names that are not available are ignored.
    pub fn set_selection<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = names
            .into_iter()
            .map(Into::into)
            .filter(|name| self.set.index.contains(name))
            .collect();
    }

    /// Add or remove one species. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, scientific_name: &str) -> bool {
        if self.selected.remove(scientific_name) {
            false
        } else if self.set.index.contains(scientific_name) {
            self.selected.insert(scientific_name.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_basemap(&mut self, basemap: BasemapProvider) {
        self.basemap = basemap;
    }

    pub fn basemap(&self) -> BasemapProvider {
        self.basemap
    }

    pub fn visible(&self) -> Vec<&EnrichedObservation> {
        select(&self.set, &self.selected)
    }

    pub fn map_view(&self) -> MapView {
        map_view(&self.visible(), &self.set.colors, self.basemap)
    }

    /// The current map view serialized for the map front-end.
    pub fn map_view_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.map_view())
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries(&self.set, &self.selected)
    }

    pub fn summary(&self) -> String {
        summary_line(self.visible().len(), self.set.config.quality_gate)
    }
}
