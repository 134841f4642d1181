//! SOM CLI - Command line tool for species observation data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "som-cli",
    version,
    about = "Species observations map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: som_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    som_cmd::run(cli.command)
}
