//! Rakuten Books API Data Transfer Objects
//!
//! These types match the `formatVersion=1` JSON shape, where every hit is
//! wrapped in an `Item` object.
//! DO NOT use these types outside the rakuten module - convert to domain types.
//!
//! Example response:
//! ```json
//! {
//!   "count": 1,
//!   "page": 1,
//!   "Items": [{
//!     "Item": {
//!       "title": "Book Title",
//!       "author": "Author One/Author Two",
//!       "publisherName": "Publisher",
//!       "salesDate": "2020年01月01日"
//!     }
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level search response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "Items", default)]
    pub items: Vec<ItemWrapper>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemWrapper {
    #[serde(rename = "Item", default)]
    pub item: Item,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: Option<String>,
    /// Slash-separated author names
    pub author: Option<String>,
    pub publisher_name: Option<String>,
    pub sales_date: Option<String>,
}
