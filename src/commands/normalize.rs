//! Normalize command handler.
//!
//! The rule set that strips trailing whitespace and forces LF endings,
//! with dry-run and verbose reporting plus a summary block.

use std::path::PathBuf;

use anyhow::Result;

use mdsweep::report::BatchSummary;
use mdsweep::scan::ScanRules;
use mdsweep::sweep::sweep_batch;

/// Handle the normalize command.
///
/// Under `--dry-run` nothing is written and changed files report as
/// "Would clean". Per-file failures go to stderr and never abort the
/// batch.
pub fn handle(files: &[String], dry_run: bool, verbose: bool) -> Result<()> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let results = sweep_batch(&paths, ScanRules::normalize(), !dry_run);

    let mut summary = BatchSummary::new(dry_run);
    for (path, result) in paths.iter().zip(&results) {
        match result {
            Ok(report) if report.changed => {
                let status = if dry_run { "Would clean" } else { "Cleaned" };
                println!("{}: {}", status, path.display());
                if verbose {
                    println!(
                        "  Total lines: {}, Lines with trailing whitespace: {}",
                        report.lines, report.trailing_lines
                    );
                }
                summary.record(report);
            }
            Ok(report) => {
                if verbose {
                    println!("No changes: {}", path.display());
                }
                summary.record(report);
            }
            Err(err) => {
                eprintln!("{}", err);
                if verbose {
                    println!("No changes: {}", path.display());
                }
                summary.record_failure();
            }
        }
    }

    println!();
    println!("{}", summary.render());

    if dry_run && summary.modified > 0 {
        println!("\nRun without --dry-run to apply changes");
    }

    Ok(())
}
