//! Adapter layer: Convert Rakuten DTOs to domain models
//!
//! This is the ONLY place where Rakuten DTO types become domain types.

use super::dto;
use crate::catalog::domain::CatalogEntry;

/// Convert a search response to the first item's entry.
pub fn to_entry(response: dto::SearchResponse) -> Option<CatalogEntry> {
    if response.count == 0 {
        return None;
    }

    let item = response.items.into_iter().next()?.item;

    Some(CatalogEntry {
        title: item.title.unwrap_or_default(),
        authors: join_authors(item.author.as_deref().unwrap_or_default()),
        publisher: item.publisher_name.unwrap_or_default(),
        published_date: item.sales_date.unwrap_or_default(),
    })
}

/// Rakuten separates authors with `/`; everything else uses ", ".
fn join_authors(raw: &str) -> String {
    raw.split('/')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(count: u32, items: Vec<dto::Item>) -> dto::SearchResponse {
        dto::SearchResponse {
            count,
            items: items.into_iter().map(|item| dto::ItemWrapper { item }).collect(),
        }
    }

    #[test]
    fn test_convert_item() {
        let response = make_response(
            1,
            vec![dto::Item {
                title: Some("Example Book".to_string()),
                author: Some("Yamada Taro/ Suzuki Hanako".to_string()),
                publisher_name: Some("Pub Co".to_string()),
                sales_date: Some("2020年01月01日".to_string()),
            }],
        );

        let entry = to_entry(response).unwrap();
        assert_eq!(entry.title, "Example Book");
        assert_eq!(entry.authors, "Yamada Taro, Suzuki Hanako");
        assert_eq!(entry.publisher, "Pub Co");
        assert_eq!(entry.published_date, "2020年01月01日");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let entry = to_entry(make_response(1, vec![dto::Item::default()])).unwrap();
        assert!(entry.is_empty());
    }

    #[test]
    fn test_zero_count_is_miss() {
        assert!(to_entry(make_response(0, vec![])).is_none());
    }

    #[test]
    fn test_join_authors() {
        assert_eq!(join_authors(""), "");
        assert_eq!(join_authors("Solo"), "Solo");
        assert_eq!(join_authors("A/B//C "), "A, B, C");
    }
}
