//! Web front end.
//!
//! A thin axum layer over the resolver and record store. Handlers share one
//! [`AppState`]; nothing else is global.
//!
//! ## Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | Page listing recorded books |
//! | `/fetch_book_info` | POST | Resolve an identifier without recording it |
//! | `/commit_book_info` | POST | Record a confirmed book |
//! | `/scan` | POST | Resolve and record in one step (barcode scanner flow) |
//! | `/api/books` | GET | Recorded books as JSON |
//! | `/download_csv`, `/download` | GET | CSV export as `books.csv` |

mod page;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result, ResultExt};
use crate::resolver::ResolutionPolicy;
use crate::store::RecordStore;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<ResolutionPolicy>,
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(policy: ResolutionPolicy, store: RecordStore) -> Self {
        Self {
            policy: Arc::new(policy),
            store: Arc::new(store),
        }
    }
}

/// Create the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/fetch_book_info", post(routes::fetch_book_info))
        .route("/commit_book_info", post(routes::commit_book_info))
        .route("/scan", post(routes::scan))
        .route("/api/books", get(routes::list_books))
        .route("/download_csv", get(routes::download_csv))
        .route("/download", get(routes::download_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve until the process is stopped.
pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| Error::config(format!("Invalid bind address '{}': {}", bind, e)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(format!("binding {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context("serving HTTP")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
