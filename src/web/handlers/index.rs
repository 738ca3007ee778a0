//! Submission form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::web::flash::{Flash, FlashMessage};

/// A created short link as displayed on the result page.
#[derive(Debug, Clone)]
pub struct ShortenResult {
    pub short_url: String,
    /// Base64-encoded SVG for a `data:image/svg+xml;base64,…` URI.
    pub qr_image: String,
    pub original_url: String,
}

/// Template for the submission form and result page.
///
/// Renders `templates/index.html` with:
/// - an optional one-shot flash message
/// - the URL submission form
/// - an optional creation result (short URL, QR image, original URL)
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flash: Option<FlashMessage>,
    pub result: Option<ShortenResult>,
}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
///
/// Displays any pending flash message and clears its cookie so the message
/// shows exactly once.
pub async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = state.flash.peek(&headers);
    let had_flash = flash.is_some();

    let mut response = IndexTemplate {
        flash,
        result: None,
    }
    .into_response();

    if had_flash {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, Flash::clear_cookie());
    }

    response
}
