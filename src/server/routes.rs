//! JSON and CSV route handlers.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::catalog::BookRecord;
use crate::export::{self, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
use crate::identifier::{self, ValidationError};
use crate::resolver::ResolutionOutcome;

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Raw identifier as typed or scanned
    #[serde(alias = "identifier")]
    pub isbn: String,
}

/// Errors a handler can answer with
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "status": "invalid", "error": e.to_string() }),
            ),
            Self::NotFound(identifier) => (
                StatusCode::NOT_FOUND,
                json!({ "status": "not_found", "identifier": identifier }),
            ),
            Self::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "status": "error", "error": message }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

async fn resolve(state: &AppState, raw: &str) -> Result<BookRecord, ApiError> {
    match state.policy.resolve(raw).await {
        Ok(ResolutionOutcome::Resolved(record)) => Ok(record),
        Ok(ResolutionOutcome::NotFound) => Err(ApiError::NotFound(raw.trim().to_string())),
        Err(e) => {
            tracing::debug!(raw, error = %e, "Rejected identifier");
            Err(ApiError::Validation(e))
        }
    }
}

/// Resolve an identifier for the user to confirm; nothing is recorded.
pub async fn fetch_book_info(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<BookRecord>, ApiError> {
    resolve(&state, &req.isbn).await.map(Json)
}

/// Record a book the user confirmed (possibly after editing it).
pub async fn commit_book_info(
    State(state): State<AppState>,
    Json(mut record): Json<BookRecord>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = identifier::normalize(&record.identifier, state.policy.identifier_mode())
        .map_err(ApiError::Validation)?;
    record.identifier = id.as_str().to_string();
    tracing::info!(identifier = %record.identifier, "Recording confirmed book");
    state.store.append(record);
    Ok(Json(json!({ "status": "success" })))
}

/// Resolve and record in one step.
pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<BookRecord>, ApiError> {
    let record = resolve(&state, &req.isbn).await?;
    state.store.append(record.clone());
    Ok(Json(record))
}

/// Everything recorded so far, oldest first.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<BookRecord>> {
    Json(state.store.snapshot())
}

/// CSV download of everything recorded so far.
pub async fn download_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.store.snapshot();
    let bytes = export::render(&records).map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!(rows = records.len(), "Exported CSV");

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::CatalogProvider;
    use crate::catalog::CatalogSource::{GoogleBooks, OpenBd, Rakuten};
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::resolver::{ResolutionPolicy, Strategy};
    use crate::server::router;
    use crate::store::RecordStore;
    use crate::test_utils::mock_record;

    fn state(providers: Vec<MockCatalog>) -> AppState {
        let policy = ResolutionPolicy::new(
            providers
                .into_iter()
                .map(|p| Arc::new(p) as Arc<dyn CatalogProvider>)
                .collect(),
            Strategy::MergeFill,
        );
        AppState::new(policy, RecordStore::new())
    }

    fn example_state() -> AppState {
        state(vec![
            MockCatalog::unavailable(GoogleBooks),
            MockCatalog::hit(Rakuten, "Example Book", "", "Pub Co", "2020-01-01"),
            MockCatalog::hit(OpenBd, "", "Jane Doe", "", ""),
        ])
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_resolves_without_recording() {
        let state = example_state();
        let response = router(state.clone())
            .oneshot(post_json("/fetch_book_info", r#"{"isbn": "978-4-7981-5711-2"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["identifier"], "9784798157112");
        assert_eq!(json["title"], "Example Book");
        assert_eq!(json["authors"], "Jane Doe");
        assert_eq!(json["publishedDate"], "2020-01-01");
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_invalid_identifier() {
        let response = router(example_state())
            .oneshot(post_json("/fetch_book_info", r#"{"isbn": "12-34"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["status"], "invalid");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let state = state(vec![
            MockCatalog::miss(GoogleBooks),
            MockCatalog::unavailable(Rakuten),
            MockCatalog::miss(OpenBd),
        ]);
        let response = router(state)
            .oneshot(post_json("/fetch_book_info", r#"{"isbn": "4798157110"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["status"], "not_found");
    }

    #[tokio::test]
    async fn test_commit_appends() {
        let state = example_state();
        let response = router(state.clone())
            .oneshot(post_json(
                "/commit_book_info",
                r#"{"isbn": "9784798157112", "title": "Edited Title", "authors": "Jane Doe",
                    "publisher": "Pub Co", "publishedDate": "2020-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "success");

        let snapshot = state.store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "Edited Title");
    }

    #[tokio::test]
    async fn test_commit_rejects_missing_identifier() {
        let state = example_state();
        let response = router(state.clone())
            .oneshot(post_json("/commit_book_info", r#"{"title": "Orphan"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_commit_normalizes_identifier() {
        let state = example_state();
        let response = router(state.clone())
            .oneshot(post_json(
                "/commit_book_info",
                r#"{"isbn": " 978-4-7981-5711-2 ", "title": "Example Book"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(state.clone())
            .oneshot(post_json(
                "/commit_book_info",
                r#"{"isbn": "not an isbn!", "title": "Bogus"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["status"], "invalid");

        let identifiers: Vec<_> = state
            .store
            .snapshot()
            .into_iter()
            .map(|r| r.identifier)
            .collect();
        assert_eq!(identifiers, vec!["9784798157112".to_string()]);
    }

    #[tokio::test]
    async fn test_scan_resolves_and_records() {
        let state = example_state();
        let app = router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json("/scan", r#"{"isbn": "9784798157112"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/books")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["publisher"], "Pub Co");
    }

    #[tokio::test]
    async fn test_download_csv_attachment() {
        let state = example_state();
        state.store.append(mock_record("9784798157112"));
        state.store.append(BookRecord {
            title: "With, comma".to_string(),
            ..mock_record("4798157110")
        });

        for uri in ["/download_csv", "/download"] {
            let response = router(state.clone()).oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "text/csv; charset=utf-8"
            );
            assert_eq!(
                response.headers()[header::CONTENT_DISPOSITION],
                "attachment; filename=\"books.csv\""
            );

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let text = String::from_utf8(bytes.to_vec()).unwrap();
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "identifier,title,authors,publisher,publishedDate");
            assert!(lines[2].starts_with("4798157110,\"With, comma\","));
        }
    }
}
