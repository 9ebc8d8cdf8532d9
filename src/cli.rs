//! CLI definitions for mdsweep.
//!
//! The clap structures live here, separated from main.rs, so command
//! handlers and tests can construct them directly.

use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

#[derive(Parser)]
#[command(name = "mdsweep")]
#[command(about = "Markdown-aware whitespace sweeper")]
#[command(
    long_about = "Markdown-aware whitespace sweeper.

Sweeps whitespace problems out of text files line by line while leaving
fenced code blocks in Markdown files byte-for-byte untouched. Files are
rewritten in place, and only when their content actually changed.

QUICK START:
    mdsweep cleanup docs/*.md        Collapse whitespace-only lines
    mdsweep normalize docs/*.md      Strip trailing whitespace
    mdsweep normalize --dry-run -v wiki/index.md"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collapse whitespace-only lines into empty lines
    #[command(long_about = "Collapse lines that contain only spaces or tabs into truly empty lines.

Content between triple-backtick fences in Markdown files is left
untouched, as is list and blockquote indentation. Intentional double
blank lines used for section separation survive.

EXAMPLES:
    mdsweep cleanup README.md
    mdsweep cleanup docs/*.md notes.txt")]
    Cleanup {
        /// Files to process
        files: Vec<String>,
    },

    /// Strip trailing whitespace and force LF line endings
    #[command(long_about = "Remove trailing spaces and tabs from every line outside fenced code
blocks and rewrite files with LF line endings.

Fenced code keeps its whitespace byte-for-byte; the fence delimiter
lines themselves are right-trimmed. Leading indentation is never
touched.

EXAMPLES:
    mdsweep normalize wiki/*.md
    mdsweep normalize --dry-run -v index.md")]
    Normalize {
        /// Files to process
        #[arg(required = true)]
        files: Vec<String>,
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Print per-file line counts
        #[arg(long, short)]
        verbose: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
