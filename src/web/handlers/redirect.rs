//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` on success; temporary semantics keep the
///   mapping re-resolvable and leave method/caching untouched
/// - **404** with an error page for an unknown code
/// - **500** with an error page on unexpected failure
///
/// Click accounting happens inside the resolver and never affects the
/// response.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let destination = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, destination)]).into_response())
}
