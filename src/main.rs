//! Book Minder - resolves book metadata from ISBNs and scanned barcodes.
//!
//! Identifiers are looked up in several public catalogs and the answers are
//! combined into one record. Recorded books can be exported as CSV. The
//! application runs as a small web app or as one-shot CLI commands.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod identifier;
pub mod resolver;
pub mod server;
pub mod store;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so `lookup --csv` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("book_minder=info".parse()?))
        .init();

    cli::run_command(&args)
}
