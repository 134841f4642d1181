//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the map front-end
//! as JSON.

use serde::Serialize;

/// An observation row with the species' common name attached.
///
/// `common_name` is `None` when the species table has no row for
/// `scientific_name` or that row has an empty `common` cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedObservation {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place: String,
    /// Observation date (YYYY-MM-DD).
    pub observed_on: String,
    pub photo_url: Option<String>,
    pub quality_grade: String,
}

/// Species metadata as stored after duplicate keys were resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeciesInfo {
    pub scientific_name: String,
    pub common_name: Option<String>,
}

/// How many observation rows each enrichment gate removed.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EnrichmentCounts {
    /// Observation rows in the store.
    pub total: usize,
    /// Rows whose quality grade did not pass the gate.
    pub removed_by_quality_gate: usize,
    /// Rows that passed the gate but had no common name, when one is required.
    pub removed_missing_common_name: usize,
    /// Rows whose scientific name has no species row.
    pub unmatched: usize,
}
