//! Batch summary accounting for the normalize command.

use crate::sweep::FileReport;

/// Aggregated results for one batch run.
///
/// Line totals accumulate only from files that actually changed, so the
/// summary reflects the work performed (or, under dry-run, the work that
/// would be performed). Failed files count toward the file total but never
/// toward the modified tally.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files given on the command line, failed ones included.
    pub total_files: usize,
    /// Files whose content differed after the scan.
    pub modified: usize,
    /// Lines scanned across modified files.
    pub total_lines: usize,
    /// Lines with trailing whitespace across modified files.
    pub lines_cleaned: usize,
    /// Whether the batch ran without writing.
    pub dry_run: bool,
}

impl BatchSummary {
    /// Start an empty summary.
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Fold one file report into the totals.
    pub fn record(&mut self, report: &FileReport) {
        self.total_files += 1;
        if report.changed {
            self.modified += 1;
            self.total_lines += report.lines;
            self.lines_cleaned += report.trailing_lines;
        }
    }

    /// Count a failed file toward the total without crediting changes.
    pub fn record_failure(&mut self) {
        self.total_files += 1;
    }

    /// Render the summary block printed after the per-file status lines.
    pub fn render(&self) -> String {
        let mut lines = vec!["=".repeat(60), "Summary:".to_string()];
        let qualifier = if self.dry_run { "that would be " } else { "" };
        lines.push(format!(
            "  Files {}modified: {}/{}",
            qualifier, self.modified, self.total_files
        ));
        if self.modified > 0 {
            lines.push(format!("  Total lines processed: {}", self.total_lines));
            lines.push(format!("  Lines cleaned: {}", self.lines_cleaned));
        }
        lines.join("\n")
    }
}
