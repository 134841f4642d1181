//! The selection filter.
//!
//! The map starts empty: an empty selection shows nothing. Filtering only
//! borrows the observation set and never changes it.

use crate::dataset::ObservationSet;
use som_db::models::EnrichedObservation;
use std::collections::BTreeSet;

/// Observations whose scientific name is in `selection`, in source order.
pub fn select<'a>(
    set: &'a ObservationSet,
    selection: &BTreeSet<String>,
) -> Vec<&'a EnrichedObservation> {
    if selection.is_empty() {
        return Vec::new();
    }
    set.observations
        .iter()
        .filter(|o| selection.contains(&o.scientific_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetReport;
    use som_species::config::PipelineConfig;
    use som_species::sources::SourceFingerprint;

    fn observation(name: &str, lat: f64) -> EnrichedObservation {
        EnrichedObservation {
            scientific_name: name.to_string(),
            common_name: None,
            latitude: Some(lat),
            longitude: Some(29.5),
            place: "Rwanda".to_string(),
            observed_on: "2023-01-01".to_string(),
            photo_url: None,
            quality_grade: "research".to_string(),
        }
    }

    fn sample_set() -> ObservationSet {
        ObservationSet::index(
            SourceFingerprint("test".to_string()),
            PipelineConfig::default(),
            vec![
                observation("Gorilla beringei", -1.5),
                observation("Pan troglodytes", -2.4),
                observation("Gorilla beringei", -1.4),
                observation("Papio anubis", -2.0),
            ],
            DatasetReport::default(),
        )
    }

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_selection_shows_nothing() {
        let set = sample_set();
        assert!(select(&set, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn selection_is_exact_subset() {
        let set = sample_set();
        let selected = select(&set, &names(&["Gorilla beringei", "Papio anubis"]));
        assert_eq!(selected.len(), 3);
        assert!(selected
            .iter()
            .all(|o| o.scientific_name == "Gorilla beringei" || o.scientific_name == "Papio anubis"));
        assert_eq!(selected[0].latitude, Some(-1.5));
        assert_eq!(selected[1].latitude, Some(-1.4));
    }

    #[test]
    fn unknown_names_match_nothing() {
        let set = sample_set();
        assert!(select(&set, &names(&["Colobus angolensis"])).is_empty());
    }

    #[test]
    fn filtering_leaves_the_set_untouched() {
        let set = sample_set();
        let before = set.clone();
        let _ = select(&set, &names(&["Pan troglodytes"]));
        let _ = select(&set, &BTreeSet::new());
        assert_eq!(set, before);
    }
}
