//! Web front end command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::resolver::ResolutionPolicy;
use crate::server::{self, AppState};
use crate::store::RecordStore;

/// Validate configuration, then serve until Ctrl-C.
pub fn cmd_serve(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    let policy = ResolutionPolicy::from_config(config)?;
    tracing::info!(
        strategy = ?policy.strategy(),
        identifiers = ?policy.identifier_mode(),
        timeout_secs = config.resolution.timeout().as_secs(),
        "Resolution policy ready"
    );

    let state = AppState::new(policy, RecordStore::new());
    rt.block_on(server::serve(state, &config.server.bind))?;
    Ok(())
}
