//! In-memory SQLite store for species observation data.
//!
//! Typed records from `som-species` are loaded into two tables and joined
//! with a single `LEFT JOIN` on the scientific name. The join is the one
//! enrichment step: observations without species metadata are kept with an
//! absent common name unless the caller asks for common names to be required.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use som_db::Database;
//! use som_species::species::SpeciesRecord;
//!
//! let db = Database::new().unwrap();
//! db.load_species(&[SpeciesRecord {
//!     genus: "Gorilla".to_string(),
//!     species: "beringei".to_string(),
//!     common_name: Some("Mountain Gorilla".to_string()),
//! }])
//! .unwrap();
//! let species = db.query_species().unwrap();
//! assert_eq!(species[0].scientific_name, "Gorilla beringei");
//! ```
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the species and observations tables.
///
/// This struct is cheaply cloneable (via `Rc`). It is only used while a
/// dataset is being built; the derived observation set is what sessions share.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use som_species::species::SpeciesRecord;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_species(&[SpeciesRecord {
            genus: "Pan".to_string(),
            species: "troglodytes".to_string(),
            common_name: Some("Chimpanzee".to_string()),
        }])
        .unwrap();
        let species = db2.query_species().unwrap();
        assert_eq!(species.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_species().unwrap().is_empty());
        assert!(db.query_enriched_observations(None, false).unwrap().is_empty());
    }
}
