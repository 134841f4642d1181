//! Render-ready species observation data.
//!
//! [`pipeline::build_observation_set`] parses both sources, enriches them
//! through the in-memory store and indexes the result into an immutable
//! [`ObservationSet`]. [`SourceCache`] keeps one set per source identity.
//! Each user then works through a [`Session`]: selection in, map view,
//! legend and counter out.

pub mod availability;
pub mod cache;
pub mod dataset;
pub mod palette;
pub mod pipeline;
pub mod render;
pub mod selection;
pub mod session;

pub use cache::SourceCache;
pub use dataset::{DatasetReport, ObservationSet};
pub use session::Session;
