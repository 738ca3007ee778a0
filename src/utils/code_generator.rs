//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated random codes.
const CODE_LENGTH: usize = 6;

/// Compiled regex for custom code validation: ASCII letters and digits only,
/// 3 to 20 characters inclusive.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,20}$").unwrap());

/// Generates a random 6-character alphanumeric short code.
///
/// Uses the thread-local CSPRNG, so repeated calls have low collision
/// probability, but uniqueness is NOT guaranteed here - the store's
/// constraint enforces it at insert time.
///
/// Codes are drawn from `[A-Za-z0-9]` only, keeping every generated code
/// inside the same character set the custom-code validator accepts.
pub fn generate_random_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidCodeFormat`] if the code does not match.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_code("promo2026").is_ok());
/// assert!(validate_custom_code("ab").is_err());          // Too short
/// assert!(validate_custom_code("my-link").is_err());     // Hyphen not allowed
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if CUSTOM_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::InvalidCodeFormat)
    }
}
