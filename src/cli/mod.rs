//! Command-line interface for book-minder.
//!
//! This module provides the `serve` and `lookup` commands. Running the
//! binary without a subcommand starts the web front end.

mod commands;

pub use commands::{Cli, Commands, run_command};
