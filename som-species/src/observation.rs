use crate::config::RowPolicy;
use crate::error::{DataSourceError, Result};
use crate::observed_date::parse_observed_on;
use crate::table::{line_of, reader, reject_row, ColumnIndex, ParsedTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const REQUIRED_COLUMNS: [&str; 6] = [
    "search_species",
    "latitude",
    "longitude",
    "place",
    "observed_on",
    "quality_grade",
];
const OPTIONAL_COLUMNS: [&str; 1] = ["photo_url"];

/// One row of the observations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Value of `search_species`; joins against [`SpeciesRecord::scientific_name`](crate::species::SpeciesRecord::scientific_name)
    pub scientific_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place: String,
    pub observed_on: NaiveDate,
    pub photo_url: Option<String>,
    pub quality_grade: String,
}

impl ObservationRecord {
    /// `(latitude, longitude)` when the observation can be placed on a map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        valid_coordinates(self.latitude, self.longitude)
    }
}

/// Both coordinates present, finite, and inside WGS84 bounds.
pub fn valid_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<(f64, f64)> {
    match (latitude, longitude) {
        (Some(lat), Some(lon))
            if lat.is_finite()
                && lon.is_finite()
                && (-90.0..=90.0).contains(&lat)
                && (-180.0..=180.0).contains(&lon) =>
        {
            Some((lat, lon))
        }
        _ => None,
    }
}

/// Parse a coordinate cell. Empty cells and missing-value markers are absent;
/// text that is not a number is an error.
fn parse_coordinate(cell: Option<&str>) -> std::result::Result<Option<f64>, String> {
    match cell {
        None => Ok(None),
        Some(s) => match s.parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(None),
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(format!("'{}' is not a coordinate", s)),
        },
    }
}

fn record_from_row(
    columns: &ColumnIndex,
    record: &csv::StringRecord,
) -> std::result::Result<ObservationRecord, String> {
    let scientific_name = columns
        .get(record, "search_species")
        .ok_or_else(|| "search_species is empty".to_string())?;
    let observed_on_raw = columns
        .get(record, "observed_on")
        .ok_or_else(|| "observed_on is empty".to_string())?;
    let observed_on = parse_observed_on(observed_on_raw)
        .ok_or_else(|| format!("'{}' is not a date", observed_on_raw))?;
    let latitude = parse_coordinate(columns.get(record, "latitude"))?;
    let longitude = parse_coordinate(columns.get(record, "longitude"))?;
    Ok(ObservationRecord {
        scientific_name: scientific_name.to_string(),
        latitude,
        longitude,
        place: columns.get(record, "place").unwrap_or_default().to_string(),
        observed_on,
        photo_url: columns.get(record, "photo_url").map(String::from),
        quality_grade: columns
            .get(record, "quality_grade")
            .unwrap_or_default()
            .to_string(),
    })
}

/// Parse the observations table.
///
/// Expected columns (by header, extra columns ignored):
/// `search_species, latitude, longitude, place, observed_on, quality_grade`
/// and optionally `photo_url`.
///
/// Missing coordinates are not an error here; such observations are kept and
/// excluded later when the display set is indexed.
pub fn parse_observations_csv(
    source_name: &str,
    csv_object: &str,
    policy: RowPolicy,
) -> Result<ParsedTable<ObservationRecord>> {
    let mut rdr = reader(csv_object);
    let headers = rdr
        .headers()
        .map_err(|e| DataSourceError::csv(source_name, e))?
        .clone();
    let columns = ColumnIndex::resolve(source_name, &headers, &REQUIRED_COLUMNS, &OPTIONAL_COLUMNS)?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut skipped = 0usize;
    for row in rdr.records() {
        let record = row.map_err(|e| DataSourceError::csv(source_name, e))?;
        rows_read += 1;
        match record_from_row(&columns, &record) {
            Ok(observation) => records.push(observation),
            Err(reason) => reject_row(policy, source_name, line_of(&record), reason, &mut skipped)?,
        }
    }
    log::info!(
        "[SOM] loader: parsed {} observations from {}, skipped {}",
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

#[cfg(test)]
mod test {
    use super::*;

    const STR_RESULT: &str = r#"id,search_species,latitude,longitude,place,observed_on,photo_url,quality_grade
101,Gorilla beringei,-1.4667,29.5,"Volcanoes National Park, Rwanda",2023-07-14,https://static.example.org/photos/101/square.jpg,research
102,Cercopithecus kandti,-1.43,29.58,"Musanze, Rwanda",2023-07-15,,needs_id
103,Gorilla beringei,,,"Bwindi, Uganda",2022-11-02,,research
104,Gorilla beringei,NaN,29.6,"Virunga, DRC",2022-11-03,,casual
"#;

    #[test]
    fn test_parse_observations_csv() {
        let table = parse_observations_csv("species_observations.csv", STR_RESULT, RowPolicy::Skip).unwrap();
        assert_eq!(table.records.len(), 4);
        let first = &table.records[0];
        assert_eq!(first.scientific_name, "Gorilla beringei");
        assert_eq!(first.place, "Volcanoes National Park, Rwanda");
        assert_eq!(first.observed_on, NaiveDate::from_ymd_opt(2023, 7, 14).unwrap());
        assert_eq!(first.quality_grade, "research");
        assert_eq!(first.coordinates(), Some((-1.4667, 29.5)));
        assert!(table.records[1].photo_url.is_none());
    }

    #[test]
    fn test_missing_and_nan_coordinates_are_absent() {
        let table = parse_observations_csv("species_observations.csv", STR_RESULT, RowPolicy::Strict).unwrap();
        assert!(table.records[2].latitude.is_none());
        assert!(table.records[2].coordinates().is_none());
        assert!(table.records[3].latitude.is_none());
        assert_eq!(table.records[3].longitude, Some(29.6));
        assert!(table.records[3].coordinates().is_none());
    }

    #[test]
    fn test_photo_url_column_is_optional() {
        let csv_data = "\
search_species,latitude,longitude,place,observed_on,quality_grade
Gorilla beringei,-1.5,29.5,Rwanda,2023-01-01,research
";
        let table = parse_observations_csv("obs.csv", csv_data, RowPolicy::Strict).unwrap();
        assert_eq!(table.records.len(), 1);
        assert!(table.records[0].photo_url.is_none());
    }

    #[test]
    fn test_unparsable_rows_are_skipped_and_counted() {
        let csv_data = "\
search_species,latitude,longitude,place,observed_on,quality_grade
Gorilla beringei,north,29.5,Rwanda,2023-01-01,research
,-1.5,29.5,Rwanda,2023-01-01,research
Gorilla beringei,-1.5,29.5,Rwanda,not-a-date,research
Gorilla beringei,-1.5,29.5,Rwanda,2023-01-02,research
";
        let table = parse_observations_csv("obs.csv", csv_data, RowPolicy::Skip).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.skipped, 3);
        assert_eq!(table.rows_read, 4);
    }

    #[test]
    fn test_strict_policy_reports_line() {
        let csv_data = "\
search_species,latitude,longitude,place,observed_on,quality_grade
Gorilla beringei,-1.5,29.5,Rwanda,2023-01-01,research
Gorilla beringei,-1.5,29.5,Rwanda,someday,research
";
        let err = parse_observations_csv("obs.csv", csv_data, RowPolicy::Strict).unwrap_err();
        match err {
            DataSourceError::MalformedRow { line, source_name, .. } => {
                assert_eq!(line, 3);
                assert_eq!(source_name, "obs.csv");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_markers_are_absent_under_strict_policy() {
        let csv_data = "\
search_species,latitude,longitude,place,observed_on,photo_url,quality_grade
Gorilla beringei,-1.5,29.5,Rwanda,2023-01-01,https://example.org/photos/1/square.jpg,research
Gorilla beringei,NA,NA,Rwanda,2023-01-02,nan,research
Gorilla beringei,null,29.5,Rwanda,2023-01-03,None,research
";
        let table = parse_observations_csv("obs.csv", csv_data, RowPolicy::Strict).unwrap();
        assert_eq!(table.records.len(), 3);
        assert_eq!(table.skipped, 0);
        assert!(table.records[1].coordinates().is_none());
        assert!(table.records[1].photo_url.is_none());
        assert!(table.records[2].latitude.is_none());
        assert!(table.records[2].photo_url.is_none());
    }

    #[test]
    fn test_out_of_range_coordinates_are_not_displayable() {
        assert!(valid_coordinates(Some(95.0), Some(10.0)).is_none());
        assert!(valid_coordinates(Some(10.0), Some(-181.0)).is_none());
        assert!(valid_coordinates(Some(f64::INFINITY), Some(10.0)).is_none());
        assert_eq!(valid_coordinates(Some(-1.5), Some(29.5)), Some((-1.5, 29.5)));
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "search_species,latitude,longitude,place,quality_grade\n";
        let err = parse_observations_csv("obs.csv", csv_data, RowPolicy::Skip).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingColumn { ref column, .. } if column == "observed_on"));
    }
}
