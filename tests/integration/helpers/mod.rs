//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Run the mdsweep binary and capture output.
pub fn run_mdsweep(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_mdsweep"))
        .args(args)
        .env("NO_COLOR", "1") // Disable colors for consistent output
        .output()
        .expect("Failed to execute mdsweep");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write a fixture file into the temp dir and return its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}
