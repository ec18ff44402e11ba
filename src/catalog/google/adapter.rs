//! Adapter layer: Convert Google Books DTOs to domain models
//!
//! This is the ONLY place where Google Books DTO types become domain types.

use super::dto;
use crate::catalog::domain::CatalogEntry;

/// Convert a volumes search response to the first volume's entry.
///
/// Returns `None` when the search matched nothing.
pub fn to_entry(response: dto::VolumesResponse) -> Option<CatalogEntry> {
    if response.total_items == 0 {
        return None;
    }

    let info = response.items.into_iter().next()?.volume_info;

    Some(CatalogEntry {
        title: info.title.unwrap_or_default(),
        authors: info.authors.join(", "),
        publisher: info.publisher.unwrap_or_default(),
        published_date: info.published_date.unwrap_or_default(),
    })
}
