//! One-shot lookup command.

use std::io::Write;

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::export;
use crate::resolver::{ResolutionOutcome, ResolutionPolicy};
use crate::store::RecordStore;

/// Resolve each identifier in turn and print what was found.
pub fn cmd_lookup(
    rt: &Runtime,
    config: &Config,
    identifiers: &[String],
    csv: bool,
) -> anyhow::Result<()> {
    config.validate()?;
    let policy = ResolutionPolicy::from_config(config)?;
    let store = RecordStore::new();

    rt.block_on(async {
        for raw in identifiers {
            match policy.resolve(raw).await {
                Ok(ResolutionOutcome::Resolved(record)) => {
                    if !csv {
                        println!("✓ {}", record.identifier);
                        println!("  Title:     {}", record.title);
                        println!("  Authors:   {}", record.authors);
                        println!("  Publisher: {}", record.publisher);
                        println!("  Published: {}", record.published_date);
                        println!();
                    }
                    store.append(record);
                }
                Ok(ResolutionOutcome::NotFound) => {
                    eprintln!("✗ {}: no match in any catalog", raw.trim());
                }
                Err(e) => {
                    eprintln!("✗ {}: {}", raw.trim(), e);
                }
            }
        }
    });

    if csv {
        let bytes = export::render(&store.snapshot())?;
        std::io::stdout().write_all(&bytes)?;
    } else {
        println!("{} of {} resolved", store.len(), identifiers.len());
    }
    Ok(())
}
