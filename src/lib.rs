//! Markdown-aware whitespace sweeping.
//!
//! Two rule sets over one fence-aware line scanner: `cleanup` collapses
//! whitespace-only lines into truly empty ones, `normalize` strips trailing
//! whitespace and forces LF line endings. Content between triple-backtick
//! fences in Markdown files passes through byte-for-byte.

pub mod report;
pub mod scan;
pub mod sweep;

pub use report::BatchSummary;
pub use scan::{clean_whitespace, normalize_whitespace, ScanRules};
pub use sweep::{sweep_batch, sweep_file, FileAccessError, FileReport};
