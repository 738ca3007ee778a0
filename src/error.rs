//! Application error taxonomy.
//!
//! Every failure a request can produce is a distinct variant so callers
//! branch on kind instead of matching error message strings. The `Display`
//! strings double as the user-facing messages shown in flash messages and
//! error pages; operator detail travels in the wrapped sources and is logged,
//! never rendered.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StoreError;
use crate::infrastructure::qr::QrError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL was empty or failed validation after normalization.
    #[error("Please enter a valid URL (e.g., https://example.com)")]
    InvalidUrl,

    /// A custom short code did not match the allowed format.
    #[error("Custom code must be 3-20 alphanumeric characters")]
    InvalidCodeFormat,

    /// Five consecutive random codes collided with existing rows.
    #[error("Could not generate a unique short code. Please try again.")]
    CodeExhaustion,

    /// Insert hit the store's uniqueness constraint. Only reachable for the
    /// custom-code path, or an extremely unlikely race on the random path.
    #[error("That custom code is already in use. Please try another one.")]
    CodeInUse,

    /// Storage fault during link creation. The user sees a generic message;
    /// the wrapped source is logged for operators.
    #[error("An error occurred. Please try again.")]
    Storage(#[source] StoreError),

    /// No link exists for the requested short code. Maps to HTTP 404.
    #[error("URL not found")]
    NotFound,

    /// Unexpected storage fault during redirect resolution. Maps to HTTP 500.
    #[error("Redirect failed")]
    Redirect(#[source] StoreError),

    /// QR artifact generation failed for an otherwise created link.
    #[error("An error occurred. Please try again.")]
    Qr(#[from] QrError),

    /// The request carried no usable Host header, so a short URL cannot be
    /// constructed. Web-boundary failure, not part of the core taxonomy.
    #[error("An error occurred. Please try again.")]
    MissingHost,
}

/// Template for the error page.
///
/// Renders `templates/error.html` with the user-facing message.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    error: String,
}

impl AppError {
    /// HTTP status this error maps to when rendered as a page.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidUrl | AppError::InvalidCodeFormat | AppError::MissingHost => {
                StatusCode::BAD_REQUEST
            }
            AppError::CodeInUse => StatusCode::CONFLICT,
            AppError::CodeExhaustion
            | AppError::Storage(_)
            | AppError::Redirect(_)
            | AppError::Qr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let template = ErrorTemplate {
            error: self.to_string(),
        };

        (status, template).into_response()
    }
}
