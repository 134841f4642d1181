//! The immutable, render-ready observation set built once per source identity.

use crate::availability::{partition_displayable, AvailableSpeciesIndex};
use crate::palette::ColorAssignment;
use serde::Serialize;
use som_db::models::{EnrichedObservation, EnrichmentCounts};
use som_species::config::PipelineConfig;
use som_species::sources::SourceFingerprint;
use som_species::table::LoadReport;

/// Row-level diagnostics gathered across the whole pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetReport {
    pub load: LoadReport,
    /// Species rows that replaced an earlier row with the same scientific name.
    pub duplicate_species: usize,
    pub enrichment: EnrichmentCounts,
    /// Enriched observations dropped for absent or invalid coordinates.
    pub missing_coordinates: usize,
    /// Scientific names observed but not present in the species table.
    pub unmatched_species: Vec<String>,
    /// Species-table entries with no displayable observation.
    pub species_without_observations: usize,
}

/// Everything a session needs to filter and render, derived once at load.
///
/// Nothing here is mutated after construction; sessions borrow it (usually
/// through an `Arc` handed out by [`SourceCache`](crate::cache::SourceCache)).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSet {
    #[serde(skip)]
    pub fingerprint: SourceFingerprint,
    pub config: PipelineConfig,
    /// Displayable enriched observations, in source order.
    pub observations: Vec<EnrichedObservation>,
    pub index: AvailableSpeciesIndex,
    pub colors: ColorAssignment,
    pub report: DatasetReport,
}

impl ObservationSet {
    /// Index enriched observations: drop the ones that cannot be placed on
    /// the map, count per species, and assign each available species a colour.
    pub fn index(
        fingerprint: SourceFingerprint,
        config: PipelineConfig,
        enriched: Vec<EnrichedObservation>,
        mut report: DatasetReport,
    ) -> Self {
        let (observations, missing_coordinates) = partition_displayable(enriched);
        let index = AvailableSpeciesIndex::build(&observations);
        let colors = ColorAssignment::from_names(index.names());
        report.missing_coordinates = missing_coordinates;
        log::info!(
            "[SOM] index: {} displayable observations across {} species",
            observations.len(),
            index.len()
        );
        Self {
            fingerprint,
            config,
            observations,
            index,
            colors,
            report,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
