//! Fence-aware whitespace scanning engine.
//!
//! A single-pass line filter with two rule sets sharing one loop:
//! - `cleanup` replaces whitespace-only lines with truly empty lines while
//!   keeping intentional double blank lines for section separation
//! - `normalize` strips trailing spaces and tabs and forces LF line endings
//!
//! Both rule sets track fenced code blocks in Markdown input and leave
//! their content byte-for-byte untouched. Fence detection is lexical only:
//! a line whose trimmed content starts with three backticks toggles the
//! fence state, language tags and all. An unclosed fence protects the rest
//! of the document; that is accepted behavior, not an error.
//!
//! The engine is pure and total: no I/O, no failure modes. File handling
//! lives in [`crate::sweep`].

use std::borrow::Cow;

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Rule set applied by [`scan`].
///
/// The two shipped rule sets are [`ScanRules::cleanup`] and
/// [`ScanRules::normalize`]; the flags exist so both run through one
/// engine instead of two divergent scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRules {
    /// Replace whitespace-only lines with empty lines.
    pub collapse_blank_lines: bool,
    /// Strip trailing spaces and tabs from lines outside fences.
    pub trim_trailing: bool,
    /// Right-trim the fence delimiter lines themselves.
    pub trim_fence_lines: bool,
}

impl ScanRules {
    /// Rules for the `cleanup` command: collapse whitespace-only lines and
    /// leave everything else, fence delimiter lines included, untouched.
    pub fn cleanup() -> Self {
        Self {
            collapse_blank_lines: true,
            trim_trailing: false,
            trim_fence_lines: false,
        }
    }

    /// Rules for the `normalize` command: strip trailing whitespace
    /// everywhere outside fences, fence delimiter lines included.
    pub fn normalize() -> Self {
        Self {
            collapse_blank_lines: false,
            trim_trailing: true,
            trim_fence_lines: true,
        }
    }
}

/// Whether a line toggles the fence state.
///
/// The check is "starts with", not "equals": an opening fence usually
/// carries a language tag, and indented fences still count.
pub fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// A line that has characters but only spaces and tabs, as opposed to a
/// truly empty line with zero characters.
fn is_whitespace_only(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == ' ' || c == '\t')
}

/// Strip trailing spaces and tabs. Leading whitespace is never touched.
fn strip_trailing(line: &str) -> &str {
    line.trim_end_matches(|c| c == ' ' || c == '\t')
}

/// Run the line scan over `text` and return the processed text.
///
/// CRLF pairs are normalized to LF before the per-line scan so fence
/// detection and trailing-whitespace rules see one canonical form. Lines
/// are split on `\n` and rejoined with `\n`; the line count never changes,
/// only line content does.
pub fn scan(text: &str, fence_aware: bool, rules: ScanRules) -> String {
    let text: Cow<'_, str> = if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let mut swept: Vec<&str> = Vec::new();
    let mut inside_fence = false;
    let mut prev_was_blank = false;

    for line in text.split('\n') {
        // Fence delimiters toggle state and pass through, optionally
        // right-trimmed.
        if fence_aware && is_fence_line(line) {
            inside_fence = !inside_fence;
            swept.push(if rules.trim_fence_lines {
                strip_trailing(line)
            } else {
                line
            });
            prev_was_blank = false;
            continue;
        }

        // Whitespace inside code blocks is semantically meaningful.
        if inside_fence {
            swept.push(line);
            prev_was_blank = false;
            continue;
        }

        if rules.collapse_blank_lines && is_whitespace_only(line) {
            // Collapsing is unconditional; the tracker only records that a
            // blank run is open. A following truly-empty line passes
            // through the branch below, so double blanks survive.
            swept.push("");
            if !prev_was_blank {
                prev_was_blank = true;
            }
            continue;
        }

        swept.push(if rules.trim_trailing {
            strip_trailing(line)
        } else {
            line
        });
        prev_was_blank = line.is_empty();
    }

    swept.join("\n")
}

/// Collapse whitespace-only lines, leaving trailing whitespace on content
/// lines alone.
pub fn clean_whitespace(text: &str, fence_aware: bool) -> String {
    scan(text, fence_aware, ScanRules::cleanup())
}

/// Strip trailing whitespace outside fences and force LF line endings.
pub fn normalize_whitespace(text: &str, fence_aware: bool) -> String {
    scan(text, fence_aware, ScanRules::normalize())
}

/// Number of lines as split on LF. An empty document is one empty line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Number of lines whose right end carries at least one space or tab.
pub fn trailing_whitespace_lines(text: &str) -> usize {
    text.split('\n')
        .filter(|line| strip_trailing(line).len() != line.len())
        .count()
}
