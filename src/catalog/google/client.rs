//! Google Books HTTP client
//!
//! Searches volumes by `isbn:` query and keeps the first hit.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogEntry, CatalogError};
use crate::catalog::http;
use crate::identifier::Identifier;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Google Books API client
pub struct GoogleBooksClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// Create a new client against the public API
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            http_client: http::build_client()?,
            base_url: base_url.into(),
        })
    }

    /// Look up a book; `Ok(None)` means Google has no match.
    pub async fn fetch(
        &self,
        id: &Identifier,
        timeout: Duration,
    ) -> Result<Option<CatalogEntry>, CatalogError> {
        let url = format!(
            "{}/volumes?q=isbn:{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        let response: dto::VolumesResponse =
            http::get_json(&self.http_client, &url, timeout).await?;
        Ok(adapter::to_entry(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::{IdentifierMode, normalize};
    use crate::test_utils::{spawn_json_server, spawn_recording_server, spawn_slow_server};

    fn id() -> Identifier {
        normalize("9784798157112", IdentifierMode::Isbn).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = GoogleBooksClient::new().unwrap();
        assert_eq!(client.base_url, "https://www.googleapis.com/books/v1");
    }

    #[tokio::test]
    async fn test_fetch_hit() {
        let body = r#"{"totalItems": 1, "items": [{"volumeInfo": {
            "title": "Example Book", "authors": ["Jane Doe"], "publishedDate": "2020"
        }}]}"#;
        let (base, seen) = spawn_recording_server("/volumes", 200, body).await;
        let client = GoogleBooksClient::with_base_url(base).unwrap();

        let entry = client.fetch(&id(), Duration::from_secs(2)).await.unwrap().unwrap();
        assert_eq!(entry.title, "Example Book");
        assert_eq!(entry.authors, "Jane Doe");
        assert_eq!(entry.publisher, "");

        let queries = seen.lock().clone();
        assert_eq!(queries, vec!["q=isbn:9784798157112".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_miss() {
        let base = spawn_json_server("/volumes", 200, r#"{"totalItems": 0}"#).await;
        let client = GoogleBooksClient::with_base_url(base).unwrap();
        let result = client.fetch(&id(), Duration::from_secs(2)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let base = spawn_slow_server("/volumes", Duration::from_secs(5), "{}").await;
        let client = GoogleBooksClient::with_base_url(base).unwrap();
        let result = client.fetch(&id(), Duration::from_millis(100)).await;
        assert_eq!(result, Err(CatalogError::Timeout(100)));
    }
}
