//! JSON HTTP API over the calculator.
//!
//! Endpoints:
//! - `GET /state`: the case loaded at startup, computed
//! - `GET /presets`: available preset names
//! - `GET /presets/{name}`: a preset case, computed
//! - `POST /compute`: compute the balance for a posted set of inputs

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::report::CaseReport;

pub use types::{ErrorResponse, PresetList};

/// Immutable application state shared across all request handlers.
///
/// Every request computes from scratch; the only shared data is the case
/// loaded at startup, so no locks are needed.
pub struct AppState {
    /// Case computed at startup.
    pub case: CaseReport,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/presets", get(handlers::list_presets))
        .route("/presets/{name}", get(handlers::get_preset))
        .route("/compute", post(handlers::compute))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
