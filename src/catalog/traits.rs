//! The catalog provider capability.
//!
//! The resolver only ever talks to `dyn CatalogProvider`, so tests can
//! substitute scripted providers for the real HTTP clients.
//!
//! # Example
//!
//! ```ignore
//! use book_minder::catalog::traits::CatalogProvider;
//!
//! async fn ask(provider: &dyn CatalogProvider, id: &Identifier) {
//!     match provider.lookup(id, Duration::from_secs(5)).await {
//!         ProviderOutcome::Hit(entry) => println!("{}", entry.title),
//!         ProviderOutcome::Miss => println!("unknown"),
//!         ProviderOutcome::Unavailable(e) => println!("failed: {}", e),
//!     }
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;

use super::domain::{CatalogSource, ProviderOutcome};
use crate::identifier::Identifier;

/// One upstream catalog.
///
/// Implementations issue at most one outbound request per call, never
/// retry, and hold no per-call state.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Which catalog this is.
    fn source(&self) -> CatalogSource;

    /// Ask the catalog about `id`, giving up after `timeout`.
    async fn lookup(&self, id: &Identifier, timeout: Duration) -> ProviderOutcome;
}

// Implement the trait for real clients

#[async_trait]
impl CatalogProvider for super::google::GoogleBooksClient {
    fn source(&self) -> CatalogSource {
        CatalogSource::GoogleBooks
    }

    async fn lookup(&self, id: &Identifier, timeout: Duration) -> ProviderOutcome {
        self.fetch(id, timeout).await.into()
    }
}

#[async_trait]
impl CatalogProvider for super::rakuten::RakutenClient {
    fn source(&self) -> CatalogSource {
        CatalogSource::Rakuten
    }

    async fn lookup(&self, id: &Identifier, timeout: Duration) -> ProviderOutcome {
        self.fetch(id, timeout).await.into()
    }
}

#[async_trait]
impl CatalogProvider for super::openbd::OpenBdClient {
    fn source(&self) -> CatalogSource {
        CatalogSource::OpenBd
    }

    async fn lookup(&self, id: &Identifier, timeout: Duration) -> ProviderOutcome {
        self.fetch(id, timeout).await.into()
    }
}
