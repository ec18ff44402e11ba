//! Resolution service - turns a raw identifier into one book record
//!
//! This is the high-level API for looking up a book:
//! 1. Normalize the identifier
//! 2. Ask the catalogs in priority order (Google Books, Rakuten, openBD)
//! 3. Combine their answers according to the configured [`Strategy`]
//!
//! A catalog that fails is logged and skipped; it never fails the
//! resolution.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    BookRecord, CatalogError, CatalogProvider, GoogleBooksClient, OpenBdClient, ProviderOutcome,
    RakutenClient,
};
use crate::config::Config;
use crate::identifier::{self, Identifier, IdentifierMode, ValidationError};

/// How answers from several catalogs are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Ask every catalog; each field takes the first non-empty value by priority
    #[default]
    MergeFill,
    /// Stop at the first catalog that knows the book and use its answer as-is
    FirstMatch,
}

/// Outcome of resolving a valid identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(BookRecord),
    /// No catalog had any metadata
    NotFound,
}

impl ResolutionOutcome {
    pub fn into_record(self) -> Option<BookRecord> {
        match self {
            Self::Resolved(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

/// Resolves identifiers against an ordered list of catalogs
pub struct ResolutionPolicy {
    /// Highest priority first
    providers: Vec<Arc<dyn CatalogProvider>>,
    strategy: Strategy,
    timeout: Duration,
    identifier_mode: IdentifierMode,
}

impl ResolutionPolicy {
    /// Create a policy over `providers`, highest priority first.
    pub fn new(providers: Vec<Arc<dyn CatalogProvider>>, strategy: Strategy) -> Self {
        Self {
            providers,
            strategy,
            timeout: Duration::from_secs(5),
            identifier_mode: IdentifierMode::Isbn,
        }
    }

    /// Build the production policy: Google Books, then Rakuten, then openBD.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let providers: Vec<Arc<dyn CatalogProvider>> = vec![
            Arc::new(GoogleBooksClient::new()?),
            Arc::new(RakutenClient::new(
                config.rakuten_application_id().map(str::to_string),
            )?),
            Arc::new(OpenBdClient::new()?),
        ];

        Ok(Self::new(providers, config.resolution.strategy)
            .with_timeout(config.resolution.timeout())
            .with_identifier_mode(config.resolution.identifier_mode))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_identifier_mode(mut self, mode: IdentifierMode) -> Self {
        self.identifier_mode = mode;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn identifier_mode(&self) -> IdentifierMode {
        self.identifier_mode
    }

    /// Normalize `raw` and resolve it.
    ///
    /// A malformed identifier is returned as an error without contacting
    /// any catalog.
    pub async fn resolve(&self, raw: &str) -> Result<ResolutionOutcome, ValidationError> {
        let id = identifier::normalize(raw, self.identifier_mode)?;
        Ok(self.resolve_identifier(&id).await)
    }

    /// Resolve an already-normalized identifier.
    pub async fn resolve_identifier(&self, id: &Identifier) -> ResolutionOutcome {
        let outcome = match self.strategy {
            Strategy::MergeFill => self.merge_fill(id).await,
            Strategy::FirstMatch => self.first_match(id).await,
        };

        match &outcome {
            ResolutionOutcome::Resolved(record) => {
                tracing::info!(identifier = %id, title = %record.title, "Resolved book");
            }
            ResolutionOutcome::NotFound => {
                tracing::info!(identifier = %id, "No catalog had metadata");
            }
        }
        outcome
    }

    /// Query every catalog concurrently, then merge in priority order.
    async fn merge_fill(&self, id: &Identifier) -> ResolutionOutcome {
        // join_all keeps input order, so arrival order can't affect priority
        let outcomes = join_all(
            self.providers
                .iter()
                .map(|provider| self.ask(provider.as_ref(), id)),
        )
        .await;

        let mut record = BookRecord::seeded(id);
        for outcome in &outcomes {
            if let ProviderOutcome::Hit(entry) = outcome {
                record.fill_from(entry);
            }
        }

        if record.has_no_metadata() {
            ResolutionOutcome::NotFound
        } else {
            ResolutionOutcome::Resolved(record)
        }
    }

    /// Query catalogs one at a time and keep the first hit verbatim.
    async fn first_match(&self, id: &Identifier) -> ResolutionOutcome {
        for provider in &self.providers {
            if let ProviderOutcome::Hit(entry) = self.ask(provider.as_ref(), id).await {
                return ResolutionOutcome::Resolved(BookRecord::from_entry(id, entry));
            }
        }
        ResolutionOutcome::NotFound
    }

    /// Ask one catalog, bounded by the policy timeout.
    async fn ask(&self, provider: &dyn CatalogProvider, id: &Identifier) -> ProviderOutcome {
        let source = provider.source();
        let lookup = provider.lookup(id, self.timeout);
        let outcome = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(outcome) => outcome,
            Err(_) => {
                ProviderOutcome::Unavailable(CatalogError::Timeout(self.timeout.as_millis()))
            }
        };

        match &outcome {
            ProviderOutcome::Hit(_) => {
                tracing::debug!(%source, identifier = %id, "Catalog hit");
            }
            ProviderOutcome::Miss => {
                tracing::debug!(%source, identifier = %id, "Catalog miss");
            }
            ProviderOutcome::Unavailable(e) => {
                tracing::warn!(%source, identifier = %id, error = %e, "Catalog unavailable");
            }
        }
        outcome
    }
}
