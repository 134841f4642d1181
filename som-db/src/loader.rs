//! Record loading for populating the in-memory SQLite database.

use crate::Database;
use rusqlite::params;
use som_species::observation::ObservationRecord;
use som_species::observed_date::format_observed_on;
use som_species::species::SpeciesRecord;
use std::collections::HashSet;

impl Database {
    /// Load species rows, keyed on the derived scientific name.
    ///
    /// A later row whose scientific name matches an earlier one replaces it
    /// (last write wins). Returns how many rows replaced an existing species.
    pub fn load_species(&self, records: &[SpeciesRecord]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        let mut seen: HashSet<String> = HashSet::new();
        let mut replaced = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO species (scientific_name, genus, species, common_name)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for record in records {
                let scientific_name = record.scientific_name();
                if !seen.insert(scientific_name.clone()) {
                    log::warn!(
                        "[SOM] loader: duplicate species '{}', later row wins",
                        scientific_name
                    );
                    replaced += 1;
                }
                stmt.execute(params![
                    scientific_name,
                    record.genus,
                    record.species,
                    record.common_name
                ])?;
            }
        }
        tx.commit()?;
        log::info!(
            "[SOM] loader: Loaded {} species rows, {} replaced",
            records.len(),
            replaced
        );
        Ok(replaced)
    }

    /// Load observation rows in order.
    ///
    /// Absent coordinates are stored as NULL.
    pub fn load_observations(&self, records: &[ObservationRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO observations
                 (scientific_name, latitude, longitude, place, observed_on, photo_url, quality_grade)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.scientific_name,
                    record.latitude,
                    record.longitude,
                    record.place,
                    format_observed_on(&record.observed_on),
                    record.photo_url,
                    record.quality_grade
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[SOM] loader: Loaded {} observations", records.len());
        Ok(())
    }
}
