//! HTTP plumbing shared by the catalog clients.
//!
//! Every catalog is a plain JSON-over-GET API, so the clients only differ
//! in URL shape and response schema. Status handling lives here.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::domain::CatalogError;

/// User agent sent to every catalog
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client used by a catalog.
///
/// Accepts gzip-compressed responses and identifies the application.
pub fn build_client() -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CatalogError::Network(format!("Failed to build HTTP client: {}", e)))
}

/// Issue one GET bounded by `timeout` and decode the JSON body.
///
/// Non-success statuses become [`CatalogError::HttpStatus`] carrying the
/// start of the body for diagnostics.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<T, CatalogError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| CatalogError::from_reqwest(e, timeout))?;

    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(CatalogError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::HttpStatus {
            status: status.as_u16(),
            message: format!(
                "{} - {}",
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(200).collect::<String>()
            ),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| CatalogError::from_reqwest(e, timeout))?;

    serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse(e.to_string()))
}
