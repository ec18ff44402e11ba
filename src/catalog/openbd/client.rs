//! openBD HTTP client

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogEntry, CatalogError};
use crate::catalog::http;
use crate::identifier::Identifier;

const DEFAULT_BASE_URL: &str = "https://api.openbd.jp/v1";

/// openBD API client
pub struct OpenBdClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenBdClient {
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

    /// Look up a book; `Ok(None)` means openBD has no match.
    pub async fn fetch(
        &self,
        id: &Identifier,
        timeout: Duration,
    ) -> Result<Option<CatalogEntry>, CatalogError> {
        let url = format!(
            "{}/get?isbn={}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        let response: dto::GetResponse = http::get_json(&self.http_client, &url, timeout).await?;
        Ok(adapter::to_entry(response))
    }
}
