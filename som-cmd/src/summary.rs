//! `summary`: available species and load diagnostics.

use crate::InputArgs;
use anyhow::Context;
use som_data::{ObservationSet, SourceCache};
use std::fmt::Write;

pub fn run_summary(input: &InputArgs) -> anyhow::Result<()> {
    let cache = SourceCache::new(input.config());
    let set = cache
        .load_from(&input.sources())
        .context("Failed to load species observations")?;
    print!("{}", format_summary(&set));
    Ok(())
}

pub fn format_summary(set: &ObservationSet) -> String {
    let mut out = String::new();
    let report = &set.report;
    let _ = writeln!(
        out,
        "{} species, {} {}observations",
        set.index.len(),
        set.observations.len(),
        set.config.quality_gate.describe()
    );
    for species in set.index.menu_options() {
        let color = set.colors.get(&species.scientific_name).unwrap_or("-");
        let _ = writeln!(out, "  {}  {}", color, species.display_label);
    }
    let _ = writeln!(out, "Diagnostics:");
    let _ = writeln!(
        out,
        "  species rows: {} read, {} skipped, {} duplicates replaced",
        report.load.species_rows, report.load.species_skipped, report.duplicate_species
    );
    let _ = writeln!(
        out,
        "  observation rows: {} read, {} skipped",
        report.load.observation_rows, report.load.observations_skipped
    );
    let _ = writeln!(
        out,
        "  removed by quality gate: {}",
        report.enrichment.removed_by_quality_gate
    );
    let _ = writeln!(
        out,
        "  removed for missing common name: {}",
        report.enrichment.removed_missing_common_name
    );
    let _ = writeln!(out, "  missing coordinates: {}", report.missing_coordinates);
    let _ = writeln!(
        out,
        "  species without observations: {}",
        report.species_without_observations
    );
    if !report.unmatched_species.is_empty() {
        let _ = writeln!(
            out,
            "  not in species table: {}",
            report.unmatched_species.join(", ")
        );
    }
    out
}
