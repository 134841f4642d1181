//! `export`: render-ready map view for a selection, as JSON.

use crate::InputArgs;
use anyhow::Context;
use som_data::render::BasemapProvider;
use som_data::{SourceCache, Session};

pub fn run_export(
    input: &InputArgs,
    species: &[String],
    alternate_basemap: bool,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let cache = SourceCache::new(input.config());
    let set = cache
        .load_from(&input.sources())
        .context("Failed to load species observations")?;

    for name in species {
        if !set.index.contains(name) {
            log::warn!("[SOM] export: '{}' has no displayable observations", name);
        }
    }

    let mut session = Session::new(set);
    session.set_selection(species.iter().cloned());
    session.set_basemap(BasemapProvider::from_alternate(alternate_basemap));
    let view = session.map_view();
    let json = serde_json::to_string_pretty(&view).context("Failed to serialize map view")?;

    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
            log::info!("[SOM] export: wrote {} markers to {}", view.markers.len(), path);
        }
        None => println!("{}", json),
    }
    eprintln!("{}", session.summary());
    Ok(())
}
