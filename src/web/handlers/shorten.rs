//! Handler for the link creation form.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::error;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::host_from_headers;
use crate::web::flash::{Flash, FlashMessage};
use crate::web::handlers::index::{IndexTemplate, ShortenResult};

/// Submitted form fields.
///
/// Field-level limits are a cheap pre-filter; the real validation happens in
/// the link service after normalization.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[validate(length(max = 2048))]
    pub url: String,

    #[validate(length(max = 64))]
    pub custom_code: Option<String>,
}

/// Creates a short link from the submitted form.
///
/// # Endpoint
///
/// `POST /`
///
/// # Responses
///
/// - **Success**: renders the form page with the short URL, its QR artifact,
///   and the normalized original URL
/// - **Failure**: 303 redirect back to `/` with a flash cookie carrying the
///   user-facing message; the form is preserved for retry
///
/// Validation failures surface their specific message; storage and QR faults
/// collapse into a generic message for the user while the detail is logged.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        let err = if errors.field_errors().contains_key("custom_code") {
            AppError::InvalidCodeFormat
        } else {
            AppError::InvalidUrl
        };
        return flash_redirect(&state.flash, &err);
    }

    let host = match host_from_headers(&headers) {
        Ok(host) => host,
        Err(err) => return flash_redirect(&state.flash, &err),
    };

    let custom_code = form
        .custom_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string);

    match state
        .link_service
        .create_short_link(&host, &form.url, custom_code)
        .await
    {
        Ok(created) => IndexTemplate {
            flash: None,
            result: Some(ShortenResult {
                short_url: created.short_url,
                qr_image: created.qr_image,
                original_url: created.link.original_url,
            }),
        }
        .into_response(),
        Err(err) => {
            match &err {
                AppError::Storage(source) => error!("Link creation failed: {}", source),
                AppError::Qr(source) => error!("QR generation failed: {}", source),
                _ => {}
            }

            flash_redirect(&state.flash, &err)
        }
    }
}

/// Redirects back to the form carrying the error as a flash message.
fn flash_redirect(flash: &Flash, err: &AppError) -> Response {
    let mut response = Redirect::to("/").into_response();

    response.headers_mut().insert(
        header::SET_COOKIE,
        flash.set_cookie(&FlashMessage::error(err.to_string())),
    );

    response
}
