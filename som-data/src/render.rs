//! Map view model handed to the map front-end.
//!
//! Everything the JavaScript side needs is computed here: one marker per
//! selected observation with its colour and popup HTML, the bounding box to
//! fit, the basemap tiles, and the legend. The front-end only draws it.

use crate::dataset::ObservationSet;
use crate::palette::ColorAssignment;
use serde::{Deserialize, Serialize};
use som_db::models::EnrichedObservation;
use som_species::config::QualityGate;
use som_species::observation::valid_coordinates;
use std::collections::BTreeSet;

pub const MARKER_RADIUS: u32 = 6;
pub const MARKER_FILL_OPACITY: f64 = 0.7;
pub const POPUP_MAX_WIDTH: u32 = 300;
pub const PHOTO_WIDTH: &str = "200px";

/// Which tile layer to draw under the markers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasemapProvider {
    #[default]
    Standard,
    Alternate,
}

impl BasemapProvider {
    pub fn from_alternate(use_alternate: bool) -> Self {
        if use_alternate {
            BasemapProvider::Alternate
        } else {
            BasemapProvider::Standard
        }
    }

    pub fn basemap(&self) -> Basemap {
        match self {
            BasemapProvider::Standard => Basemap {
                tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "&copy; OpenStreetMap contributors".to_string(),
            },
            BasemapProvider::Alternate => Basemap {
                tile_url: "https://mt1.google.com/vt/lyrs=m&x={x}&y={y}&z={z}".to_string(),
                attribution: "Google Maps".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Basemap {
    pub tile_url: String,
    pub attribution: String,
}

/// Smallest latitude/longitude box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// `None` for an empty set; the map then keeps its current view.
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Bounds> {
        points.into_iter().fold(None, |acc, (lat, lon)| {
            Some(match acc {
                None => Bounds {
                    south: lat,
                    west: lon,
                    north: lat,
                    east: lon,
                },
                Some(b) => Bounds {
                    south: b.south.min(lat),
                    west: b.west.min(lon),
                    north: b.north.max(lat),
                    east: b.east.max(lon),
                },
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    /// Tooltip text (scientific name).
    pub tooltip: String,
    pub popup_html: String,
}

/// Render-ready view of one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub basemap: Basemap,
    pub markers: Vec<Marker>,
    pub bounds: Option<Bounds>,
    pub marker_radius: u32,
    pub fill_opacity: f64,
    pub popup_max_width: u32,
    /// Observations dropped because their species had no colour.
    pub skipped_inconsistent: usize,
}

/// Upgrade a thumbnail URL to its medium variant.
///
/// Only the last path segment is touched: `.../123/square.jpg` becomes
/// `.../123/medium.jpg`. URLs without `square` there are returned unchanged.
pub fn medium_photo_url(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((base, last)) => format!("{}/{}", base, last.replace("square", "medium")),
        None => url.replace("square", "medium"),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup body for one observation. The image element is present only when
/// the observation has a photo.
pub fn popup_html(observation: &EnrichedObservation) -> String {
    let common = observation
        .common_name
        .as_deref()
        .unwrap_or(&observation.scientific_name);
    let mut html = format!(
        "<b>Common Name:</b> {}<br><b>Scientific Name:</b> {}<br><b>Date:</b> {}<br><b>Location:</b> {}<br>",
        escape_html(common),
        escape_html(&observation.scientific_name),
        escape_html(&observation.observed_on),
        escape_html(&observation.place),
    );
    if let Some(photo) = observation.photo_url.as_deref() {
        html.push_str(&format!(
            "<img src=\"{}\" width=\"{}\">",
            escape_html(&medium_photo_url(photo)),
            PHOTO_WIDTH
        ));
    }
    html
}

/// Build markers for the selected observations.
///
/// An observation whose species has no colour is skipped and counted rather
/// than failing the render.
pub fn map_view(
    selected: &[&EnrichedObservation],
    colors: &ColorAssignment,
    basemap: BasemapProvider,
) -> MapView {
    let mut skipped_inconsistent = 0usize;
    let markers: Vec<Marker> = selected
        .iter()
        .filter_map(|o| {
            let (latitude, longitude) = valid_coordinates(o.latitude, o.longitude)?;
            let Some(color) = colors.get(&o.scientific_name) else {
                log::warn!(
                    "[SOM] render: no colour for '{}', marker skipped",
                    o.scientific_name
                );
                skipped_inconsistent += 1;
                return None;
            };
            Some(Marker {
                latitude,
                longitude,
                color: color.to_string(),
                tooltip: o.scientific_name.clone(),
                popup_html: popup_html(o),
            })
        })
        .collect();
    let bounds = Bounds::enclosing(markers.iter().map(|m| (m.latitude, m.longitude)));
    log::debug!("[SOM] render: {} markers", markers.len());
    MapView {
        basemap: basemap.basemap(),
        markers,
        bounds,
        marker_radius: MARKER_RADIUS,
        fill_opacity: MARKER_FILL_OPACITY,
        popup_max_width: POPUP_MAX_WIDTH,
        skipped_inconsistent,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub scientific_name: String,
    /// Common name, or the scientific name when there is none.
    pub label: String,
    pub color: String,
}

/// Legend rows for the selected species that are available, in scientific-name order.
pub fn legend_entries(set: &ObservationSet, selection: &BTreeSet<String>) -> Vec<LegendEntry> {
    selection
        .iter()
        .filter_map(|name| {
            let species = set.index.get(name)?;
            let color = set.colors.get(name)?;
            Some(LegendEntry {
                scientific_name: species.scientific_name.clone(),
                label: species
                    .common_name
                    .clone()
                    .unwrap_or_else(|| species.scientific_name.clone()),
                color: color.to_string(),
            })
        })
        .collect()
}

/// Counter line shown above the map.
pub fn summary_line(count: usize, gate: QualityGate) -> String {
    format!("Showing {} {}observations", count, gate.describe())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(name: &str, common: Option<&str>, photo: Option<&str>) -> EnrichedObservation {
        EnrichedObservation {
            scientific_name: name.to_string(),
            common_name: common.map(String::from),
            latitude: Some(-1.5),
            longitude: Some(29.5),
            place: "Volcanoes National Park, Rwanda".to_string(),
            observed_on: "2023-07-14".to_string(),
            photo_url: photo.map(String::from),
            quality_grade: "research".to_string(),
        }
    }

    #[test]
    fn test_medium_photo_url() {
        assert_eq!(
            medium_photo_url("https://static.example.org/photos/101/square.jpg"),
            "https://static.example.org/photos/101/medium.jpg"
        );
        // Only the file name changes.
        assert_eq!(
            medium_photo_url("https://square.example.org/photos/square.jpeg"),
            "https://square.example.org/photos/medium.jpeg"
        );
        assert_eq!(
            medium_photo_url("https://example.org/photos/1/large.jpg"),
            "https://example.org/photos/1/large.jpg"
        );
    }

    #[test]
    fn test_popup_contains_fields_and_medium_photo() {
        let o = observation(
            "Gorilla beringei",
            Some("Mountain Gorilla"),
            Some("https://example.org/photos/1/square.jpg"),
        );
        let html = popup_html(&o);
        assert!(html.contains("<b>Common Name:</b> Mountain Gorilla"));
        assert!(html.contains("<b>Scientific Name:</b> Gorilla beringei"));
        assert!(html.contains("<b>Date:</b> 2023-07-14"));
        assert!(html.contains("<b>Location:</b> Volcanoes National Park, Rwanda"));
        assert!(html.contains("src=\"https://example.org/photos/1/medium.jpg\""));
        assert!(html.contains("width=\"200px\""));
    }

    #[test]
    fn test_popup_without_photo_has_no_image() {
        let html = popup_html(&observation("Gorilla beringei", Some("Mountain Gorilla"), None));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_popup_escapes_text() {
        let mut o = observation("Gorilla beringei", Some("<script>"), None);
        o.place = "Kahuzi & \"Biega\"".to_string();
        let html = popup_html(&o);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Kahuzi &amp; &quot;Biega&quot;"));
    }

    #[test]
    fn test_bounds() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
        let b = Bounds::enclosing([(-1.5, 29.5), (-2.4, 29.2), (0.3, 32.6)]).unwrap();
        assert_eq!(b.south, -2.4);
        assert_eq!(b.north, 0.3);
        assert_eq!(b.west, 29.2);
        assert_eq!(b.east, 32.6);
    }

    #[test]
    fn test_map_view_skips_uncoloured_species() {
        let colors = ColorAssignment::from_names(["Gorilla beringei"]);
        let gorilla = observation("Gorilla beringei", Some("Mountain Gorilla"), None);
        let stray = observation("Papio anubis", None, None);
        let view = map_view(&[&gorilla, &stray], &colors, BasemapProvider::Standard);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.skipped_inconsistent, 1);
        assert_eq!(view.markers[0].tooltip, "Gorilla beringei");
        assert_eq!(view.marker_radius, 6);
        assert_eq!(view.popup_max_width, 300);
    }

    #[test]
    fn test_empty_selection_has_no_bounds() {
        let view = map_view(&[], &ColorAssignment::default(), BasemapProvider::Alternate);
        assert!(view.markers.is_empty());
        assert!(view.bounds.is_none());
        assert_eq!(view.basemap.attribution, "Google Maps");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(3, QualityGate::ResearchOnly),
            "Showing 3 research grade observations"
        );
        assert_eq!(summary_line(0, QualityGate::Any), "Showing 0 observations");
    }
}
