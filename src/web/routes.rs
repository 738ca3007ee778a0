//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`        - Submission form
/// - `POST /`        - Create a short link
/// - `GET  /health`  - Health check: database, cache
/// - `GET  /{code}`  - Short link redirect
///
/// Static segments win over the `{code}` capture, so `/health` is never
/// treated as a short code.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
