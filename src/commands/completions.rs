//! Completions command handler.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

/// Generate a completion script for the given shell on stdout.
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "mdsweep", &mut io::stdout());
    Ok(())
}
