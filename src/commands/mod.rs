//! Command handlers for the mdsweep CLI.
//!
//! Each submodule handles one subcommand. The dispatch logic stays in
//! main.rs.

pub mod cleanup;
pub mod completions;
pub mod normalize;
