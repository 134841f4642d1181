use crate::config::RowPolicy;
use crate::error::{DataSourceError, Result};
use crate::table::{line_of, reader, reject_row, ColumnIndex, ParsedTable};
use serde::{Deserialize, Serialize};

/// One row of the species table.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub genus: String,
    pub species: String,
    /// Vernacular name, absent when the cell is empty
    pub common_name: Option<String>,
}

impl SpeciesRecord {
    /// Canonical join key: `genus + " " + species`.
    pub fn scientific_name(&self) -> String {
        format!("{} {}", self.genus, self.species)
    }
}

/// Parse the species table.
///
/// Expected columns (by header, extra columns ignored): `genus, species, common`
///
/// Rows with an empty genus or species epithet cannot form a join key and
/// are handled according to `policy`.
pub fn parse_species_csv(
    source_name: &str,
    csv_object: &str,
    policy: RowPolicy,
) -> Result<ParsedTable<SpeciesRecord>> {
    let mut rdr = reader(csv_object);
    let headers = rdr
        .headers()
        .map_err(|e| DataSourceError::csv(source_name, e))?
        .clone();
    let columns = ColumnIndex::resolve(source_name, &headers, &["genus", "species"], &["common"])?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut skipped = 0usize;
    for row in rdr.records() {
        let record = row.map_err(|e| DataSourceError::csv(source_name, e))?;
        rows_read += 1;
        let genus = columns.get(&record, "genus");
        let species = columns.get(&record, "species");
        match (genus, species) {
            (Some(genus), Some(species)) => records.push(SpeciesRecord {
                genus: genus.to_string(),
                species: species.to_string(),
                common_name: columns.get(&record, "common").map(String::from),
            }),
            _ => reject_row(
                policy,
                source_name,
                line_of(&record),
                "genus and species are both required".to_string(),
                &mut skipped,
            )?,
        }
    }
    log::info!(
        "[SOM] loader: parsed {} species from {}, skipped {}",
        records.len(),
        source_name,
        skipped
    );
    Ok(ParsedTable {
        records,
        rows_read,
        skipped,
    })
}
