//! Per-file driver for the whitespace scanner.
//!
//! Reads a file as UTF-8 text, runs the scan engine, and writes the result
//! back only when it differs from the original bytes. Failures are scoped
//! to a single file: the batch runner reports them and moves on to the
//! next file.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::scan::{self, ScanRules};

/// File extension that enables fence-aware scanning.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Access failure for a single file: missing, unreadable, unwritable, or
/// not valid UTF-8. The only error kind the driver produces; the scan
/// itself cannot fail.
#[derive(Debug, Error)]
#[error("Error processing {}: {}", path.display(), message)]
pub struct FileAccessError {
    /// File the failure belongs to.
    pub path: PathBuf,
    /// Underlying I/O or decoding message.
    pub message: String,
}

impl FileAccessError {
    fn new(path: &Path, err: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Outcome of sweeping one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File the report belongs to.
    pub path: PathBuf,
    /// Whether the scan produced different text than the original.
    pub changed: bool,
    /// Lines scanned, counted after line endings were normalized.
    pub lines: usize,
    /// Lines that carried trailing spaces or tabs.
    pub trailing_lines: usize,
}

/// Whether a path gets fence-aware treatment. Only Markdown files do.
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == MARKDOWN_EXTENSION)
}

/// Sweep a single file with the given rules.
///
/// With `write` set, the file is rewritten (UTF-8, LF line endings) when
/// and only when the scanned text differs from the raw original; an
/// unchanged file is never touched. With `write` unset this is the
/// dry-run path and the file is read-only.
pub fn sweep_file(
    path: &Path,
    rules: ScanRules,
    write: bool,
) -> Result<FileReport, FileAccessError> {
    let raw = fs::read_to_string(path).map_err(|e| FileAccessError::new(path, e))?;

    let fence_aware = is_markdown_path(path);

    // Stats are taken on the canonical LF form, same as the scan itself.
    let text: Cow<'_, str> = if raw.contains("\r\n") {
        Cow::Owned(raw.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(&raw)
    };
    let lines = scan::line_count(&text);
    let trailing_lines = scan::trailing_whitespace_lines(&text);

    let swept = scan::scan(&text, fence_aware, rules);

    // Verbatim comparison against the raw input: a sole CRLF -> LF
    // conversion counts as a change.
    let changed = swept != raw;

    if changed && write {
        fs::write(path, &swept).map_err(|e| FileAccessError::new(path, e))?;
        debug!(path = %path.display(), lines, trailing_lines, "rewrote file");
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        changed,
        lines,
        trailing_lines,
    })
}

/// Sweep a batch of files, one independent scan per file.
///
/// Each file owns its own scan state, so the batch fans out across files.
/// Results come back in input order and a failed file never aborts the
/// rest of the batch.
pub fn sweep_batch(
    paths: &[PathBuf],
    rules: ScanRules,
    write: bool,
) -> Vec<Result<FileReport, FileAccessError>> {
    paths
        .par_iter()
        .map(|path| sweep_file(path, rules, write))
        .collect()
}
