//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Web front end
//! - `lookup`: One-shot resolution from the terminal
//! - `init-config`: Write a config file to edit

mod init_config;
mod lookup;
mod serve;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::identifier::IdentifierMode;
use crate::resolver::Strategy;

pub use init_config::cmd_init_config;
pub use lookup::cmd_lookup;
pub use serve::cmd_serve;

/// Book Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "BOOK_MINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the web front end (default)
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:5000
        #[arg(short, long)]
        bind: Option<String>,
        #[command(flatten)]
        resolution: ResolutionArgs,
    },
    /// Resolve identifiers and print the results
    Lookup {
        /// ISBNs or barcodes to resolve
        #[arg(required = true)]
        identifiers: Vec<String>,
        /// Print the resolved books as CSV instead of a summary
        #[arg(long)]
        csv: bool,
        #[command(flatten)]
        resolution: ResolutionArgs,
    },
    /// Write the effective configuration to the config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
        #[command(flatten)]
        resolution: ResolutionArgs,
    },
}

/// Resolution overrides shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct ResolutionArgs {
    /// Rakuten application id (or set RAKUTEN_APP_ID env var)
    #[arg(long, env = "RAKUTEN_APP_ID")]
    pub rakuten_app_id: Option<String>,
    /// How catalog answers are combined
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,
    /// Per-catalog timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Accept any scanned code, not just ISBN-10/13
    #[arg(long)]
    pub barcode: bool,
}

impl ResolutionArgs {
    /// Layer these flags over file configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref key) = self.rakuten_app_id {
            config.credentials.rakuten_application_id = Some(key.clone());
        }
        if let Some(strategy) = self.strategy {
            config.resolution.strategy = strategy;
        }
        if let Some(secs) = self.timeout_secs {
            config.resolution.timeout_secs = secs;
        }
        if self.barcode {
            config.resolution.identifier_mode = IdentifierMode::Barcode;
        }
    }
}

/// Run the specified CLI command.
///
/// With no subcommand, the web front end is started with file settings.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let mut config = match cli.config {
        Some(ref path) => config::load_from(path),
        None => config::load(),
    };

    match &cli.command {
        Some(Commands::Serve { bind, resolution }) => {
            resolution.apply(&mut config);
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
            cmd_serve(&rt, &config)
        }
        Some(Commands::Lookup {
            identifiers,
            csv,
            resolution,
        }) => {
            resolution.apply(&mut config);
            cmd_lookup(&rt, &config, identifiers, *csv)
        }
        Some(Commands::InitConfig { force, resolution }) => {
            resolution.apply(&mut config);
            cmd_init_config(&config, cli.config.as_deref(), *force)
        }
        None => cmd_serve(&rt, &config),
    }
}
