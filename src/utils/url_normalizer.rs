//! URL normalization and sanitization utilities.
//!
//! Submitted URLs are sanitized with plain string operations before
//! validation: scheme defaulting, whitespace removal, and lowercasing. The
//! sanitation is deliberately aggressive - internal whitespace is deleted
//! rather than rejected, and the whole URL (path and query included) is
//! lowercased.

use url::Url;

/// Normalizes a raw user-submitted URL string.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result returns `None`
///    (signals "no URL given")
/// 2. `https://` is prepended when neither `http://` nor `https://` prefix
///    is present
/// 3. Every remaining whitespace character is deleted
/// 4. The entire result is lowercased, including path and query
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url(" Example.com/Path "),
///     Some("https://example.com/path".to_string())
/// );
/// assert_eq!(normalize_url("   "), None);
/// ```
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    url.retain(|c| !c.is_whitespace());

    Some(url.to_lowercase())
}

/// Validates the syntax of a normalized URL.
///
/// True iff the string parses as a URL with an `http`/`https` scheme and a
/// host. Returns false on any parse failure, never panics.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}
