//! Host extraction from HTTP request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host serving this request from the `Host` header.
///
/// The value is kept verbatim, port included (`localhost:3000` stays
/// `localhost:3000`), because it is used to construct the short URL shown
/// back to the user.
///
/// # Errors
///
/// Returns [`AppError::MissingHost`] if the header is absent, empty, or not
/// valid UTF-8.
pub fn host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or(AppError::MissingHost)?
        .to_str()
        .map_err(|_| AppError::MissingHost)?
        .trim();

    if host.is_empty() {
        return Err(AppError::MissingHost);
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_host_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(host_from_headers(&headers).unwrap(), "example.com");
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(host_from_headers(&headers).unwrap(), "localhost:3000");
    }

    #[test]
    fn test_extract_host_missing() {
        let headers = HeaderMap::new();

        assert!(matches!(
            host_from_headers(&headers),
            Err(AppError::MissingHost)
        ));
    }

    #[test]
    fn test_extract_host_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(""));

        assert!(host_from_headers(&headers).is_err());
    }
}
