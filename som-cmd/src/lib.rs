//! Command implementations for SOM CLI.
//!
//! Both subcommands run the same load, enrich and index pipeline as the map
//! app, against CSV files on disk.

use clap::{Args, Subcommand, ValueEnum};
use som_species::config::{PipelineConfig, QualityGate, RowPolicy};
use som_species::sources::DataSources;

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print available species and load diagnostics
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the map view for a selection as JSON
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Scientific name to select (repeatable)
        #[arg(short = 's', long = "species")]
        species: Vec<String>,

        /// Use the alternate (Google Maps) basemap
        #[arg(long)]
        alternate_basemap: bool,

        /// Output path for the JSON map view (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GradeArg {
    Research,
    Any,
}

/// Source files and pipeline options shared by all subcommands.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the species table CSV (genus, species, common)
    #[arg(long, default_value = "fixtures/species_list.csv")]
    pub species_csv: String,

    /// Path to the observations CSV
    #[arg(long, default_value = "fixtures/species_observations.csv")]
    pub observations_csv: String,

    /// Quality grade an observation must have to be shown
    #[arg(long, value_enum, default_value = "research")]
    pub quality_grade: GradeArg,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Drop observations whose species has no common name
    #[arg(long)]
    pub require_common_name: bool,
}

impl InputArgs {
    pub fn sources(&self) -> DataSources {
        DataSources::from_paths(&self.species_csv, &self.observations_csv)
    }

    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            quality_gate: match self.quality_grade {
                GradeArg::Research => QualityGate::ResearchOnly,
                GradeArg::Any => QualityGate::Any,
            },
            row_policy: if self.strict {
                RowPolicy::Strict
            } else {
                RowPolicy::Skip
            },
            require_common_name: self.require_common_name,
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input } => summary::run_summary(&input),
        Command::Export {
            input,
            species,
            alternate_basemap,
            output,
        } => export::run_export(&input, &species, alternate_basemap, output.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn defaults_match_the_map_app() {
        let cli = TestCli::parse_from(["som-cli", "summary"]);
        let Command::Summary { input } = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(input.config(), PipelineConfig::default());
    }

    #[test]
    fn flags_map_to_config() {
        let cli = TestCli::parse_from([
            "som-cli",
            "export",
            "--quality-grade",
            "any",
            "--strict",
            "--require-common-name",
            "-s",
            "Gorilla beringei",
            "-s",
            "Papio anubis",
        ]);
        let Command::Export { input, species, .. } = cli.command else {
            panic!("expected export");
        };
        let config = input.config();
        assert_eq!(config.quality_gate, QualityGate::Any);
        assert_eq!(config.row_policy, RowPolicy::Strict);
        assert!(config.require_common_name);
        assert_eq!(species, vec!["Gorilla beringei", "Papio anubis"]);
    }
}
