//! Typed query methods for the enrichment join.
//!
//! The quality gate and the optional common-name requirement are applied in
//! the same statement as the join, so every caller sees one consistent
//! enriched set.

use crate::models::{EnrichedObservation, EnrichmentCounts, SpeciesInfo};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Observations joined with their species' common name, in load order.
    ///
    /// - `quality_grade`: when set, only rows with exactly this grade are kept.
    /// - `require_common_name`: when true, rows without a common name after
    ///   the join are dropped; otherwise the join is a plain outer join.
    pub fn query_enriched_observations(
        &self,
        quality_grade: Option<&str>,
        require_common_name: bool,
    ) -> anyhow::Result<Vec<EnrichedObservation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT o.scientific_name, s.common_name, o.latitude, o.longitude,
                    o.place, o.observed_on, o.photo_url, o.quality_grade
             FROM observations o
             LEFT JOIN species s ON s.scientific_name = o.scientific_name
             WHERE (?1 IS NULL OR o.quality_grade = ?1)
               AND (?2 = 0 OR s.common_name IS NOT NULL)
             ORDER BY o.id",
        )?;
        let rows = stmt
            .query_map(params![quality_grade, require_common_name], |row| {
                Ok(EnrichedObservation {
                    scientific_name: row.get(0)?,
                    common_name: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                    place: row.get(4)?,
                    observed_on: row.get(5)?,
                    photo_url: row.get(6)?,
                    quality_grade: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SOM] query: query_enriched_observations returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Row counts removed by each enrichment gate, for diagnostics.
    ///
    /// Takes the same arguments as
    /// [`query_enriched_observations`](Self::query_enriched_observations).
    pub fn query_enrichment_counts(
        &self,
        quality_grade: Option<&str>,
        require_common_name: bool,
    ) -> anyhow::Result<EnrichmentCounts> {
        let conn = self.conn.borrow();
        let (total, gated_out, missing_common, unmatched) = conn.query_row(
            "SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN ?1 IS NOT NULL AND o.quality_grade <> ?1 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN (?1 IS NULL OR o.quality_grade = ?1)
                                   AND ?2 <> 0 AND s.common_name IS NULL THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN s.scientific_name IS NULL THEN 1 ELSE 0 END), 0)
             FROM observations o
             LEFT JOIN species s ON s.scientific_name = o.scientific_name",
            params![quality_grade, require_common_name],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )?;
        Ok(EnrichmentCounts {
            total: total as usize,
            removed_by_quality_gate: gated_out as usize,
            removed_missing_common_name: missing_common as usize,
            unmatched: unmatched as usize,
        })
    }

    /// Get all species, ordered by scientific name.
    pub fn query_species(&self) -> anyhow::Result<Vec<SpeciesInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT scientific_name, common_name FROM species
             ORDER BY scientific_name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SpeciesInfo {
                    scientific_name: row.get(0)?,
                    common_name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SOM] query: query_species returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Scientific names referenced by observations but absent from the species table.
    pub fn query_unmatched_species(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT o.scientific_name
             FROM observations o
             LEFT JOIN species s ON s.scientific_name = o.scientific_name
             WHERE s.scientific_name IS NULL
             ORDER BY o.scientific_name",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }
}
