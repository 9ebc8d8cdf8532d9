//! mdsweep - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cleanup { files } => commands::cleanup::handle(&files),
        Commands::Normalize {
            files,
            dry_run,
            verbose,
        } => commands::normalize::handle(&files, dry_run, verbose),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
