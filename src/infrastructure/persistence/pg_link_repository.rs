//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. The `urls`
/// primary key on `short_code` is the single source of truth for code
/// uniqueness; [`insert`](LinkRepository::insert) surfaces a violation of it
/// as [`StoreError::DuplicateCode`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// True iff the error is a unique violation on the `urls` primary key.
///
/// Branches on the constraint reported by the database driver, not on error
/// message text.
fn is_duplicate_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("urls_pkey"))
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_code, original_url, created_at, clicks
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES ($1, $2)
            RETURNING short_code, original_url, created_at, clicks
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_duplicate_code(&e) {
                StoreError::DuplicateCode
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
