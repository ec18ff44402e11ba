//! Test utilities and fixtures for book-minder tests.
//!
//! The catalog clients are exercised against tiny local axum servers
//! serving canned responses, so no test ever touches the real APIs.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::spawn_json_server;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let base = spawn_json_server("/volumes", 200, r#"{"totalItems": 0}"#).await;
//!     let client = GoogleBooksClient::with_base_url(&base).unwrap();
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::RawQuery,
    http::{StatusCode, header},
    routing::get,
};
use parking_lot::Mutex;

use crate::catalog::BookRecord;

/// Query strings seen by a recording server, in arrival order.
pub type SeenQueries = Arc<Mutex<Vec<String>>>;

/// Serve `body` with `status` at `path` on an ephemeral port.
///
/// Returns the base URL (`http://127.0.0.1:PORT`). The server lives until
/// the test runtime shuts down.
pub async fn spawn_json_server(path: &str, status: u16, body: impl Into<String>) -> String {
    spawn_recording_server(path, status, body).await.0
}

/// Like [`spawn_json_server`], also recording each request's query string.
pub async fn spawn_recording_server(
    path: &str,
    status: u16,
    body: impl Into<String>,
) -> (String, SeenQueries) {
    let body = body.into();
    let status = StatusCode::from_u16(status).expect("valid status code");
    let seen: SeenQueries = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();

    let app = Router::new().route(
        path,
        get(move |RawQuery(query): RawQuery| {
            let body = body.clone();
            let seen = seen_in_handler.clone();
            async move {
                seen.lock().push(query.unwrap_or_default());
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    (serve(app).await, seen)
}

/// Serve `body` at `path` only after `delay`, for timeout tests.
pub async fn spawn_slow_server(path: &str, delay: Duration, body: impl Into<String>) -> String {
    let body = body.into();
    let app = Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

/// Creates a BookRecord with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let record = BookRecord {
///     title: "Custom Title".to_string(),
///     ..mock_record("9784798157112")
/// };
/// ```
pub fn mock_record(identifier: &str) -> BookRecord {
    BookRecord {
        identifier: identifier.to_string(),
        title: "Test Book".to_string(),
        authors: "Test Author".to_string(),
        publisher: "Test Press".to_string(),
        published_date: "2020-01-01".to_string(),
    }
}

/// A distinct valid 13-digit identifier for index `n`.
pub fn isbn13(n: usize) -> String {
    format!("978{:010}", n)
}
