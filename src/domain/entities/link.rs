//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// Represents one row of the `urls` table. A link is created once, never
/// updated except for the `clicks` counter, and never deleted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    /// Unique alphanumeric identifier, 3-20 characters.
    pub short_code: String,
    /// Normalized absolute destination URL.
    pub original_url: String,
    /// Set once by the database at insert time, immutable thereafter.
    pub created_at: DateTime<Utc>,
    /// Monotonically non-decreasing visit counter, starts at 0.
    pub clicks: i64,
}

impl Link {
    pub fn new(
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` and `clicks` are intentionally absent: the store assigns them
/// at insert time so they cannot be forged by callers.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}
