//! Google Books API Data Transfer Objects
//!
//! These types match what the volumes search endpoint returns.
//! DO NOT use these types outside the google module - convert to domain types.
//!
//! Example response:
//! ```json
//! {
//!   "kind": "books#volumes",
//!   "totalItems": 1,
//!   "items": [{
//!     "volumeInfo": {
//!       "title": "Book Title",
//!       "authors": ["First Author", "Second Author"],
//!       "publisher": "Publisher",
//!       "publishedDate": "2018-04-20"
//!     }
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level volumes search response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub total_items: u32,
    /// Absent entirely when there are no matches
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    /// Free-form: "2018", "2018-04" or "2018-04-20"
    pub published_date: Option<String>,
}
