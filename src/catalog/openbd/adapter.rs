//! Adapter layer: Convert openBD DTOs to domain models
//!
//! This is the ONLY place where openBD DTO types become domain types.

use super::dto;
use crate::catalog::domain::CatalogEntry;

/// Convert a `/get` response to the first slot's entry.
pub fn to_entry(response: dto::GetResponse) -> Option<CatalogEntry> {
    let summary = response.into_iter().next().flatten()?.summary;

    Some(CatalogEntry {
        title: summary.title.unwrap_or_default(),
        authors: summary.author.unwrap_or_default(),
        publisher: summary.publisher.unwrap_or_default(),
        published_date: summary.pubdate.unwrap_or_default(),
    })
}
