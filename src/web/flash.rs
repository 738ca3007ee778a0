//! One-shot flash messages carried across the POST-redirect-GET cycle.
//!
//! Messages travel in a cookie signed with HMAC-SHA256 under the session
//! secret, so a client cannot forge or alter them. A tampered or malformed
//! cookie is silently ignored. The cookie is cleared by the page that
//! displays it.

use axum::http::{HeaderMap, HeaderValue, header};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "flash";

/// A user-facing one-shot message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: String,
    pub message: String,
}

impl FlashMessage {
    /// Creates an error-level flash message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Encoder/decoder for signed flash cookies.
///
/// Cheap to clone; the signing secret is shared behind an `Arc`.
#[derive(Clone)]
pub struct Flash {
    secret: Arc<String>,
}

impl Flash {
    /// Creates a flash codec keyed with the given signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(secret.into()),
        }
    }

    /// `Set-Cookie` value carrying a signed flash message.
    ///
    /// Format: `flash=<base64url(json)>.<hex hmac>`, HttpOnly, short-lived.
    pub fn set_cookie(&self, message: &FlashMessage) -> HeaderValue {
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(message).expect("flash message serializes"));
        let signature = self.sign(&payload);

        let value = format!(
            "{COOKIE_NAME}={payload}.{signature}; Path=/; HttpOnly; SameSite=Lax; Max-Age=60"
        );

        HeaderValue::from_str(&value).expect("cookie value is ASCII")
    }

    /// `Set-Cookie` value that removes the flash cookie.
    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static("flash=; Path=/; HttpOnly; Max-Age=0")
    }

    /// Reads and verifies the flash message from request headers, if any.
    ///
    /// Returns `None` for a missing cookie, a bad signature, or an
    /// undecodable payload.
    pub fn peek(&self, headers: &HeaderMap) -> Option<FlashMessage> {
        let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

        let raw = cookie_header.split(';').find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(name), Some(value)) if name == COOKIE_NAME => Some(value.to_string()),
                _ => None,
            }
        })?;

        let (payload, signature_hex) = raw.rsplit_once('.')?;
        let signature = hex::decode(signature_hex).ok()?;

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .ok()?;

        serde_json::from_slice(&bytes).ok()
    }

    /// Hex-encoded HMAC-SHA256 of the payload under the session secret.
    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
