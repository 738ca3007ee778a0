//! QR service trait and error type.

use std::fmt;

/// Errors that can occur during QR artifact generation.
#[derive(Debug)]
pub enum QrError {
    /// The payload could not be encoded (e.g., too long for any QR version).
    EncodeError(String),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EncodeError(e) => write!(f, "QR encode error: {}", e),
        }
    }
}

impl std::error::Error for QrError {}

/// Trait for generating a displayable QR artifact from a short URL.
///
/// The caller hands over a finished short URL string and receives back a
/// base64-encoded image payload suitable for embedding in a `data:` URI.
/// Generation is pure CPU work, so the trait is synchronous.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::SvgQrGenerator`] - SVG renderer backed by `qirust`
/// - [`crate::infrastructure::qr::NullQrGenerator`] - No-op implementation for tests
pub trait QrService: Send + Sync {
    /// Encodes `url` into a QR image and returns it base64-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::EncodeError`] if the payload cannot be encoded.
    fn generate(&self, url: &str) -> Result<String, QrError>;
}
