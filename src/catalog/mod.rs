//! Book catalog module - fetches book metadata from external catalog APIs.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`google/dto.rs`, `rakuten/dto.rs`, `openbd/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - The `CatalogProvider` capability the resolver depends on
//!
//! Each catalog can change its schema without anything outside its own
//! directory noticing.

pub mod domain;
pub mod google;
pub mod http;
pub mod openbd;
pub mod rakuten;
pub mod traits;

pub use domain::{BookRecord, CatalogEntry, CatalogError, CatalogSource, ProviderOutcome};
pub use google::GoogleBooksClient;
pub use openbd::OpenBdClient;
pub use rakuten::RakutenClient;
pub use traits::CatalogProvider;
