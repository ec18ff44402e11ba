//! Rakuten Books HTTP client
//!
//! The application id goes in the query string. When none is configured,
//! lookups fail fast with [`CatalogError::MissingCredential`] and no request
//! is sent.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogEntry, CatalogError};
use crate::catalog::http;
use crate::identifier::Identifier;

const DEFAULT_BASE_URL: &str = "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404";

/// Rakuten Books API client
pub struct RakutenClient {
    application_id: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
}

impl RakutenClient {
    /// Create a new client. A blank application id counts as missing.
    pub fn new(application_id: Option<String>) -> Result<Self, CatalogError> {
        Self::with_base_url(application_id, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, proxies)
    pub fn with_base_url(
        application_id: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let application_id = application_id.filter(|key| !key.trim().is_empty());
        if application_id.is_none() {
            tracing::warn!("No Rakuten application id configured; Rakuten lookups are disabled");
        }

        Ok(Self {
            application_id,
            http_client: http::build_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.application_id.is_some()
    }

    /// Look up a book; `Ok(None)` means Rakuten has no match.
    pub async fn fetch(
        &self,
        id: &Identifier,
        timeout: Duration,
    ) -> Result<Option<CatalogEntry>, CatalogError> {
        let Some(ref application_id) = self.application_id else {
            return Err(CatalogError::MissingCredential("Rakuten application id"));
        };

        let url = format!(
            "{}?format=json&isbn={}&applicationId={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            urlencoding::encode(application_id)
        );
        let response: dto::SearchResponse = http::get_json(&self.http_client, &url, timeout).await?;
        Ok(adapter::to_entry(response))
    }
}
