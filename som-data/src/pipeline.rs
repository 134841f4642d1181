//! Load, enrich and index in one pass.
//!
//! Parsing happens in `som-species`, the join in `som-db`; this module wires
//! them together and turns the result into an [`ObservationSet`]. Any error
//! aborts the build, so callers never see a partial set.

use crate::dataset::{DatasetReport, ObservationSet};
use som_db::Database;
use som_species::config::PipelineConfig;
use som_species::observation::parse_observations_csv;
use som_species::sources::SourceText;
use som_species::species::parse_species_csv;
use som_species::table::LoadReport;
use som_species::DataSourceError;
use std::collections::HashSet;

fn store_error(e: anyhow::Error) -> DataSourceError {
    DataSourceError::Store(format!("{e:#}"))
}

/// Build the observation set for one pair of source texts.
pub fn build_observation_set(
    sources: &SourceText,
    config: &PipelineConfig,
) -> Result<ObservationSet, DataSourceError> {
    let fingerprint = sources.fingerprint();
    log::info!("[SOM] pipeline: building observation set {}", fingerprint);

    let species = parse_species_csv(&sources.species_name, &sources.species_csv, config.row_policy)?;
    let observations = parse_observations_csv(
        &sources.observations_name,
        &sources.observations_csv,
        config.row_policy,
    )?;
    let load = LoadReport {
        species_rows: species.rows_read,
        species_skipped: species.skipped,
        observation_rows: observations.rows_read,
        observations_skipped: observations.skipped,
    };

    let db = Database::new().map_err(store_error)?;
    let duplicate_species = db.load_species(&species.records).map_err(store_error)?;
    db.load_observations(&observations.records).map_err(store_error)?;

    let grade = config.quality_gate.required_grade();
    let enriched = db
        .query_enriched_observations(grade, config.require_common_name)
        .map_err(store_error)?;
    let enrichment = db
        .query_enrichment_counts(grade, config.require_common_name)
        .map_err(store_error)?;
    let unmatched_species = db.query_unmatched_species().map_err(store_error)?;
    if !unmatched_species.is_empty() {
        log::warn!(
            "[SOM] enrich: {} observed species have no species-table row",
            unmatched_species.len()
        );
    }
    let species_info = db.query_species().map_err(store_error)?;

    let report = DatasetReport {
        load,
        duplicate_species,
        enrichment,
        unmatched_species,
        ..DatasetReport::default()
    };
    let mut set = ObservationSet::index(fingerprint, config.clone(), enriched, report);

    let available: HashSet<&str> = set.index.names().collect();
    let without_observations = species_info
        .iter()
        .filter(|s| !available.contains(s.scientific_name.as_str()))
        .count();
    set.report.species_without_observations = without_observations;

    log::info!(
        "[SOM] pipeline: {} observations, {} species available, {} species without observations",
        set.observations.len(),
        set.index.len(),
        without_observations
    );
    Ok(set)
}
