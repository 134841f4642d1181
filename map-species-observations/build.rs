//! Stages the species map's data for embedding.
//!
//! `fixtures/species_list.csv` and `fixtures/species_observations.csv` are
//! copied into OUT_DIR, where `main.rs` pulls them in with `include_str!`.
//! A missing fixture becomes an empty file plus a cargo warning; the app then
//! fails its first load on the absent header row and shows the load error
//! instead of the map.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![
        ("../fixtures/species_list.csv", "species_list.csv"),
        ("../fixtures/species_observations.csv", "species_observations.csv"),
    ];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
