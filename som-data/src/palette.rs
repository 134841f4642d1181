//! Deterministic per-species display colours.
//!
//! A colour is the first three bytes of the SHA-256 digest of the scientific
//! name, written as `#rrggbb`. The same name always gets the same colour,
//! across filters and across reloads. Two different names can land on the
//! same or a visually similar colour; this is a known limitation.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Colour for one scientific name.
pub fn species_color(scientific_name: &str) -> String {
    let digest = Sha256::digest(scientific_name.as_bytes());
    format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
}

/// Scientific name to `#rrggbb`, fixed for the lifetime of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorAssignment(BTreeMap<String, String>);

impl ColorAssignment {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            names
                .into_iter()
                .map(|name| (name.to_string(), species_color(name)))
                .collect(),
        )
    }

    pub fn get(&self, scientific_name: &str) -> Option<&str> {
        self.0.get(scientific_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
