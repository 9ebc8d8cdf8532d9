//! Integration tests for the cleanup command.
//!
//! Covers the per-file status lines, the final modified tally, the empty
//! file list contract, and per-file error isolation.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{run_mdsweep, write_file};

// ============================================================================
// File Rewriting
// ============================================================================

#[test]
fn cleanup_rewrites_file_and_reports() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "page.md", "a\n   \nb\n");

    let (stdout, stderr, exit_code) = run_mdsweep(&["cleanup", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains(&format!("Cleaned: {}", path.display())));
    assert!(stdout.contains("Total files modified: 1"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nb\n");
}

#[test]
fn cleanup_second_run_reports_no_changes() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "page.md", "a\n   \nb\n");

    run_mdsweep(&["cleanup", path.to_str().unwrap()]);
    let (stdout, _, exit_code) = run_mdsweep(&["cleanup", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(&format!("No changes: {}", path.display())));
    assert!(stdout.contains("Total files modified: 0"));
}

#[test]
fn cleanup_preserves_fenced_code_in_markdown() {
    let temp = TempDir::new().unwrap();
    let content = "```\n   \n```\n";
    let path = write_file(&temp, "page.md", content);

    let (stdout, _, exit_code) = run_mdsweep(&["cleanup", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes:"));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn cleanup_processes_multiple_files_in_order() {
    let temp = TempDir::new().unwrap();
    let first = write_file(&temp, "first.md", "a\n \nb\n");
    let second = write_file(&temp, "second.md", "clean\n");

    let (stdout, _, exit_code) = run_mdsweep(&[
        "cleanup",
        first.to_str().unwrap(),
        second.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    let first_pos = stdout.find(first.to_str().unwrap()).unwrap();
    let second_pos = stdout.find(second.to_str().unwrap()).unwrap();
    assert!(first_pos < second_pos, "stdout: {}", stdout);
    assert!(stdout.contains("Total files modified: 1"));
}

// ============================================================================
// Contract Edges
// ============================================================================

#[test]
fn cleanup_without_files_exits_with_usage() {
    let (stdout, stderr, exit_code) = run_mdsweep(&["cleanup"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Usage:"), "stderr: {}", stderr);
    assert!(!stdout.contains("Total files modified"));
}

#[test]
fn cleanup_missing_file_is_nonfatal() {
    let temp = TempDir::new().unwrap();
    let good = write_file(&temp, "good.md", "a\n \nb\n");
    let missing = temp.path().join("missing.md");

    let (stdout, stderr, exit_code) = run_mdsweep(&[
        "cleanup",
        missing.to_str().unwrap(),
        good.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains(&format!("Error processing {}", missing.display())));
    assert!(stdout.contains(&format!("No changes: {}", missing.display())));
    assert!(stdout.contains(&format!("Cleaned: {}", good.display())));
    assert!(stdout.contains("Total files modified: 1"));
}
