//! Which species can be selected, and how they are labelled.

use serde::Serialize;
use som_db::models::EnrichedObservation;
use som_species::observation::valid_coordinates;
use std::collections::BTreeMap;

/// A species with at least one displayable observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableSpecies {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub observation_count: usize,
    pub display_label: String,
}

/// Menu label, e.g. `Golden Monkey (Cercopithecus kandti) (42 observations)`.
///
/// Without a common name the label starts at the scientific name.
pub fn display_label(common_name: Option<&str>, scientific_name: &str, count: usize) -> String {
    let noun = if count == 1 { "observation" } else { "observations" };
    match common_name {
        Some(common) => format!("{} ({}) ({} {})", common, scientific_name, count, noun),
        None => format!("{} ({} {})", scientific_name, count, noun),
    }
}

/// Split enriched observations into those that can be placed on the map and
/// the number that cannot (absent or invalid coordinates).
pub fn partition_displayable(
    observations: Vec<EnrichedObservation>,
) -> (Vec<EnrichedObservation>, usize) {
    let total = observations.len();
    let displayable: Vec<EnrichedObservation> = observations
        .into_iter()
        .filter(|o| {
            let ok = valid_coordinates(o.latitude, o.longitude).is_some();
            if !ok {
                log::debug!(
                    "[SOM] index: no usable coordinates for {} at {} ({})",
                    o.scientific_name,
                    o.place,
                    o.observed_on
                );
            }
            ok
        })
        .collect();
    let excluded = total - displayable.len();
    if excluded > 0 {
        log::warn!(
            "[SOM] index: {} observations excluded for missing coordinates",
            excluded
        );
    }
    (displayable, excluded)
}

/// Species that have displayable observations, keyed by scientific name.
///
/// Built only from observations that passed [`partition_displayable`], so a
/// species never appears here with a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailableSpeciesIndex(BTreeMap<String, AvailableSpecies>);

impl AvailableSpeciesIndex {
    pub fn build(displayable: &[EnrichedObservation]) -> Self {
        let mut counts: BTreeMap<&str, (Option<&str>, usize)> = BTreeMap::new();
        for observation in displayable {
            let entry = counts
                .entry(observation.scientific_name.as_str())
                .or_insert((None, 0));
            if entry.0.is_none() {
                entry.0 = observation.common_name.as_deref();
            }
            entry.1 += 1;
        }
        let index = counts
            .into_iter()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(name, (common, count))| {
                let species = AvailableSpecies {
                    scientific_name: name.to_string(),
                    common_name: common.map(String::from),
                    observation_count: count,
                    display_label: display_label(common, name, count),
                };
                (name.to_string(), species)
            })
            .collect();
        Self(index)
    }

    pub fn get(&self, scientific_name: &str) -> Option<&AvailableSpecies> {
        self.0.get(scientific_name)
    }

    pub fn contains(&self, scientific_name: &str) -> bool {
        self.0.contains_key(scientific_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in scientific-name order.
    pub fn iter(&self) -> impl Iterator<Item = &AvailableSpecies> {
        self.0.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries ordered for the selection menu: by label, then scientific name.
    pub fn menu_options(&self) -> Vec<&AvailableSpecies> {
        let mut options: Vec<&AvailableSpecies> = self.0.values().collect();
        options.sort_by(|a, b| {
            a.display_label
                .cmp(&b.display_label)
                .then_with(|| a.scientific_name.cmp(&b.scientific_name))
        });
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(name: &str, common: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> EnrichedObservation {
        EnrichedObservation {
            scientific_name: name.to_string(),
            common_name: common.map(String::from),
            latitude: lat,
            longitude: lon,
            place: "Nyungwe".to_string(),
            observed_on: "2023-03-01".to_string(),
            photo_url: None,
            quality_grade: "research".to_string(),
        }
    }

    #[test]
    fn test_display_label_format() {
        assert_eq!(
            display_label(Some("Golden Monkey"), "Cercopithecus kandti", 42),
            "Golden Monkey (Cercopithecus kandti) (42 observations)"
        );
        assert_eq!(
            display_label(Some("Mountain Gorilla"), "Gorilla beringei", 1),
            "Mountain Gorilla (Gorilla beringei) (1 observation)"
        );
        assert_eq!(
            display_label(None, "Colobus angolensis", 3),
            "Colobus angolensis (3 observations)"
        );
    }

    #[test]
    fn test_partition_drops_missing_coordinates() {
        let (displayable, excluded) = partition_displayable(vec![
            observation("Gorilla beringei", None, Some(-1.5), Some(29.5)),
            observation("Gorilla beringei", None, None, Some(29.5)),
            observation("Gorilla beringei", None, Some(-1.5), None),
            observation("Gorilla beringei", None, Some(f64::NAN), Some(29.5)),
        ]);
        assert_eq!(displayable.len(), 1);
        assert_eq!(excluded, 3);
    }

    #[test]
    fn test_index_counts_per_species() {
        let index = AvailableSpeciesIndex::build(&[
            observation("Gorilla beringei", Some("Mountain Gorilla"), Some(-1.5), Some(29.5)),
            observation("Gorilla beringei", Some("Mountain Gorilla"), Some(-1.4), Some(29.6)),
            observation("Pan troglodytes", None, Some(-2.4), Some(29.2)),
        ]);
        assert_eq!(index.len(), 2);
        let gorilla = index.get("Gorilla beringei").unwrap();
        assert_eq!(gorilla.observation_count, 2);
        assert_eq!(gorilla.common_name.as_deref(), Some("Mountain Gorilla"));
        assert_eq!(index.get("Pan troglodytes").unwrap().observation_count, 1);
    }

    #[test]
    fn test_species_without_displayable_observations_are_absent() {
        let (displayable, _) = partition_displayable(vec![
            observation("Gorilla beringei", Some("Mountain Gorilla"), Some(-1.5), Some(29.5)),
            observation("Papio anubis", Some("Olive Baboon"), None, None),
        ]);
        let index = AvailableSpeciesIndex::build(&displayable);
        assert!(index.contains("Gorilla beringei"));
        assert!(!index.contains("Papio anubis"));
        assert!(index.iter().all(|s| s.observation_count > 0));
    }

    #[test]
    fn test_menu_options_sorted_by_label() {
        let index = AvailableSpeciesIndex::build(&[
            observation("Gorilla beringei", Some("Mountain Gorilla"), Some(-1.5), Some(29.5)),
            observation("Cercopithecus kandti", Some("Golden Monkey"), Some(-1.4), Some(29.6)),
        ]);
        let labels: Vec<&str> = index
            .menu_options()
            .iter()
            .map(|s| s.display_label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Golden Monkey (Cercopithecus kandti) (1 observation)",
                "Mountain Gorilla (Gorilla beringei) (1 observation)",
            ]
        );
    }
}
