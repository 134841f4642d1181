//! The two tabular inputs and their identity.

use crate::error::{DataSourceError, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Default file name of the species table.
pub const SPECIES_FILE: &str = "species_list.csv";
/// Default file name of the observations table.
pub const OBSERVATIONS_FILE: &str = "species_observations.csv";

/// Paths to the species and observations tables on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub species: PathBuf,
    pub observations: PathBuf,
}

impl DataSources {
    pub fn from_paths(species: impl Into<PathBuf>, observations: impl Into<PathBuf>) -> Self {
        Self {
            species: species.into(),
            observations: observations.into(),
        }
    }

    /// Both default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::from_paths(dir.join(SPECIES_FILE), dir.join(OBSERVATIONS_FILE))
    }

    /// Read both files into memory.
    pub fn read(&self) -> Result<SourceText> {
        Ok(SourceText {
            species_name: display_name(&self.species),
            species_csv: read_source(&self.species)?,
            observations_name: display_name(&self.observations),
            observations_csv: read_source(&self.observations)?,
        })
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataSourceError::Missing(display_name(path)));
    }
    std::fs::read_to_string(path).map_err(|e| DataSourceError::Unreadable {
        name: display_name(path),
        reason: e.to_string(),
    })
}

/// Contents of both sources, each labelled with a name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub species_name: String,
    pub species_csv: String,
    pub observations_name: String,
    pub observations_csv: String,
}

impl SourceText {
    /// Sources held in memory (e.g. embedded at compile time).
    pub fn embedded(species_csv: &str, observations_csv: &str) -> Self {
        Self {
            species_name: SPECIES_FILE.to_string(),
            species_csv: species_csv.to_string(),
            observations_name: OBSERVATIONS_FILE.to_string(),
            observations_csv: observations_csv.to_string(),
        }
    }

    /// Identity of the two inputs, used to key the dataset cache.
    pub fn fingerprint(&self) -> SourceFingerprint {
        let mut hasher = Sha256::new();
        hasher.update((self.species_csv.len() as u64).to_le_bytes());
        hasher.update(self.species_csv.as_bytes());
        hasher.update(self.observations_csv.as_bytes());
        SourceFingerprint(hex::encode(hasher.finalize()))
    }
}

/// SHA-256 (hex) over both source texts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFingerprint(pub String);

impl std::fmt::Display for SourceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short: String = self.0.chars().take(12).collect();
        write!(f, "{}", short)
    }
}
