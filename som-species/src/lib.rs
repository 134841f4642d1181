//! Record types and CSV loading for species observation data.
//!
//! The species table (`genus, species, common`) and the observations table
//! (`search_species, latitude, longitude, place, observed_on, photo_url,
//! quality_grade`) are parsed into typed records. Rows failing their
//! required-field checks are skipped or rejected according to [`config::RowPolicy`].

pub mod config;
pub mod error;
pub mod observation;
pub mod observed_date;
pub mod sources;
pub mod species;
pub mod table;

pub use error::DataSourceError;
