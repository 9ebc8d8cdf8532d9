//! Cleanup command handler.
//!
//! The rule set that collapses whitespace-only lines. Prints one status
//! line per file and a final modified tally.

use std::path::PathBuf;

use anyhow::Result;

use mdsweep::scan::ScanRules;
use mdsweep::sweep::sweep_batch;

/// Handle the cleanup command.
///
/// An empty file list prints usage to stderr and exits 1. A per-file
/// failure goes to stderr and the batch keeps going; the failed file is
/// reported as unchanged.
pub fn handle(files: &[String]) -> Result<()> {
    if files.is_empty() {
        eprintln!("Usage: mdsweep cleanup <file1> [file2] ...");
        std::process::exit(1);
    }

    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let results = sweep_batch(&paths, ScanRules::cleanup(), true);

    let mut modified = 0;
    for (path, result) in paths.iter().zip(&results) {
        match result {
            Ok(report) if report.changed => {
                println!("Cleaned: {}", path.display());
                modified += 1;
            }
            Ok(_) => println!("No changes: {}", path.display()),
            Err(err) => {
                eprintln!("{}", err);
                println!("No changes: {}", path.display());
            }
        }
    }

    println!("\nTotal files modified: {}", modified);
    Ok(())
}
