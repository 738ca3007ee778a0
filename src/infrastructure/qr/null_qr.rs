//! No-op QR implementation for tests.

use super::service::{QrError, QrService};

/// A QR generator that returns an empty artifact.
///
/// Keeps handler tests independent of the actual encoder, mirroring
/// [`crate::infrastructure::cache::NullCache`].
pub struct NullQrGenerator;

impl NullQrGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullQrGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QrService for NullQrGenerator {
    fn generate(&self, _url: &str) -> Result<String, QrError> {
        Ok(String::new())
    }
}
