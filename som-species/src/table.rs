//! Header-driven column lookup and row rejection shared by both loaders.

use crate::config::RowPolicy;
use crate::error::{DataSourceError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

/// Records parsed from one tabular source, plus how many rows were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable<T> {
    pub records: Vec<T>,
    /// Data rows read from the source, including skipped ones.
    pub rows_read: usize,
    /// Rows dropped under [`RowPolicy::Skip`].
    pub skipped: usize,
}

/// Row counts gathered while loading both sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub species_rows: usize,
    pub species_skipped: usize,
    pub observation_rows: usize,
    pub observations_skipped: usize,
}

/// Position of each named column in a source's header row.
pub(crate) struct ColumnIndex {
    positions: Vec<(&'static str, Option<usize>)>,
}

impl ColumnIndex {
    /// Resolve `required` and `optional` column names against the header.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub(crate) fn resolve(
        source_name: &str,
        headers: &StringRecord,
        required: &[&'static str],
        optional: &[&'static str],
    ) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
        };
        let mut positions = Vec::with_capacity(required.len() + optional.len());
        for column in required {
            match find(column) {
                Some(idx) => positions.push((*column, Some(idx))),
                None => {
                    return Err(DataSourceError::MissingColumn {
                        source_name: source_name.to_string(),
                        column: column.to_string(),
                    })
                }
            }
        }
        for column in optional {
            positions.push((*column, find(column)));
        }
        Ok(Self { positions })
    }

    /// Trimmed cell value, `None` when the column is absent or the cell is
    /// empty or a missing-value marker.
    pub(crate) fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, idx)| idx.and_then(|i| record.get(i)))
            .map(str::trim)
            .filter(|s| !is_missing(s))
    }
}

/// Cell values that spreadsheet and dataframe exports write for "no value".
const MISSING_MARKERS: [&str; 10] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-nan", "null", "NULL", "None", "#N/A",
];

/// Whether a trimmed cell carries no value.
pub(crate) fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Open a headered CSV reader over `csv_object`.
pub(crate) fn reader(csv_object: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes())
}

/// 1-based line of a record in its source, or 0 if unknown.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Apply the row policy to a row that failed its checks.
///
/// Returns `Ok(())` when the row should be skipped, or the error that
/// aborts the load under [`RowPolicy::Strict`].
pub(crate) fn reject_row(
    policy: RowPolicy,
    source_name: &str,
    line: u64,
    reason: String,
    skipped: &mut usize,
) -> Result<()> {
    match policy {
        RowPolicy::Strict => Err(DataSourceError::MalformedRow {
            source_name: source_name.to_string(),
            line,
            reason,
        }),
        RowPolicy::Skip => {
            log::warn!(
                "[SOM] loader: skipping row {} of {}: {}",
                line,
                source_name,
                reason
            );
            *skipped += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_read_as_absent() {
        let headers = StringRecord::from(vec!["latitude", "photo_url", "common"]);
        let columns =
            ColumnIndex::resolve("obs.csv", &headers, &["latitude"], &["photo_url", "common"]).unwrap();
        for marker in ["", " ", "NA", "N/A", "nan", "NaN", "null", "NULL", "None", "#N/A"] {
            let record = StringRecord::from(vec![marker, marker, marker]);
            assert_eq!(columns.get(&record, "latitude"), None, "{marker:?}");
            assert_eq!(columns.get(&record, "photo_url"), None, "{marker:?}");
            assert_eq!(columns.get(&record, "common"), None, "{marker:?}");
        }
        let record = StringRecord::from(vec![" -1.5 ", "https://example.org/photos/1/square.jpg", "Olive Baboon"]);
        assert_eq!(columns.get(&record, "latitude"), Some("-1.5"));
        assert_eq!(columns.get(&record, "common"), Some("Olive Baboon"));
    }
}
