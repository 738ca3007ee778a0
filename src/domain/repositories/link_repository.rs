//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Errors surfaced by the link store.
///
/// A duplicate short code is reported distinctly from other storage failures
/// so callers can branch on kind: a collision on a custom code is a user
/// error, a transient storage fault is not.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short code already exists. Raised by the store's own uniqueness
    /// constraint, never inferred from error message text.
    #[error("short code already exists")]
    DuplicateCode,

    /// Any other storage failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository interface for the persistent short-code to URL mapping.
///
/// The capability set is deliberately small: lookup by code, insert-if-absent,
/// and an atomic counter increment. Links are never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code. A plain lookup with no side effects.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Atomically inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code already exists,
    /// [`StoreError::Database`] on other storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Atomically increments the click counter for the given code.
    ///
    /// Incrementing an unknown code is a no-op, not an error. Callers on the
    /// redirect path treat any failure here as best-effort: it is logged and
    /// must never abort the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError>;
}
