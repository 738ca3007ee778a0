//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, error, warn};

/// Service resolving short codes to their destination URLs.
///
/// Consults the cache first, falls back to the store, records the click, and
/// returns the destination. Click accounting is decoupled from the redirect's
/// success path: an increment failure is logged, never surfaced.
pub struct RedirectService {
    store: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl RedirectService {
    /// Creates a new redirect service over the given store and cache.
    pub fn new(store: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { store, cache }
    }

    /// Resolves a short code to its destination URL.
    ///
    /// # Resolution Flow
    ///
    /// 1. Cache lookup; a hit skips the store read
    /// 2. On miss, store lookup; the mapping is written back to the cache
    ///    fire-and-forget
    /// 3. Defensive scheme re-check: `https://` is prepended when the stored
    ///    URL somehow lacks one
    /// 4. Best-effort click increment, logged on failure and swallowed
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - no link for this code (HTTP 404)
    /// - [`AppError::Redirect`] - unexpected storage fault (HTTP 500)
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let destination = match self.cache.get_url(code).await {
            Ok(Some(cached_url)) => cached_url,
            Ok(None) => self.resolve_from_store(code).await?,
            Err(e) => {
                error!("Cache error for {}: {}", code, e);
                self.resolve_from_store(code).await?
            }
        };

        let destination = ensure_scheme(destination);

        if let Err(e) = self.store.increment_clicks(code).await {
            warn!("Click count update failed for {}: {}", code, e);
        }

        Ok(destination)
    }

    /// Looks up the destination in the store and refreshes the cache.
    async fn resolve_from_store(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .store
            .find_by_code(code)
            .await
            .map_err(AppError::Redirect)?
            .ok_or(AppError::NotFound)?;

        debug!("Resolved {} -> {}", code, link.original_url);

        // Refresh the cache without holding up the redirect.
        let cache = self.cache.clone();
        let cache_code = code.to_string();
        let cache_url = link.original_url.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set_url(&cache_code, &cache_url, None).await {
                warn!("Failed to cache {}: {}", cache_code, e);
            }
        });

        Ok(link.original_url)
    }
}

/// Prepends `https://` when the URL lacks a scheme.
///
/// Stored URLs are normalized at creation, so this only fires for rows
/// written by older versions or by hand.
fn ensure_scheme(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockLinkRepository, StoreError};
    use crate::infrastructure::cache::{CacheResult, NullCache};
    use async_trait::async_trait;
    use chrono::Utc;

    fn test_link(code: &str, url: &str) -> Link {
        Link::new(code.to_string(), url.to_string(), Utc::now(), 0)
    }

    /// Cache double that always hits with a fixed URL.
    struct HitCache(String);

    #[async_trait]
    impl CacheService for HitCache {
        async fn get_url(&self, _short_code: &str) -> CacheResult<Option<String>> {
            Ok(Some(self.0.clone()))
        }

        async fn set_url(
            &self,
            _short_code: &str,
            _original_url: &str,
            _ttl_seconds: Option<u64>,
        ) -> CacheResult<()> {
            Ok(())
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_resolve_success_increments_clicks() {
        let mut store = MockLinkRepository::new();

        store
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(test_link("abc123", "https://example.com/target"))));

        store
            .expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let service = RedirectService::new(Arc::new(store), Arc::new(NullCache::new()));

        let destination = service.resolve("abc123").await.unwrap();
        assert_eq!(destination, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_not_found_never_mutates() {
        let mut store = MockLinkRepository::new();

        store
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        store.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(store), Arc::new(NullCache::new()));

        let result = service.resolve("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_swallows_increment_failure() {
        let mut store = MockLinkRepository::new();

        store
            .expect_find_by_code()
            .returning(|_| Ok(Some(test_link("abc123", "https://example.com"))));

        store
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Err(StoreError::Database(sqlx::Error::RowNotFound)));

        let service = RedirectService::new(Arc::new(store), Arc::new(NullCache::new()));

        // The redirect must survive a failed click update.
        let destination = service.resolve("abc123").await.unwrap();
        assert_eq!(destination, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_prepends_missing_scheme() {
        let mut store = MockLinkRepository::new();

        store
            .expect_find_by_code()
            .returning(|_| Ok(Some(test_link("abc123", "example.com"))));
        store.expect_increment_clicks().returning(|_| Ok(()));

        let service = RedirectService::new(Arc::new(store), Arc::new(NullCache::new()));

        let destination = service.resolve("abc123").await.unwrap();
        assert_eq!(destination, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_lookup_failure_is_redirect_error() {
        let mut store = MockLinkRepository::new();

        store
            .expect_find_by_code()
            .returning(|_| Err(StoreError::Database(sqlx::Error::RowNotFound)));
        store.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(store), Arc::new(NullCache::new()));

        let result = service.resolve("abc123").await;
        assert!(matches!(result.unwrap_err(), AppError::Redirect(_)));
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_store_lookup() {
        let mut store = MockLinkRepository::new();

        store.expect_find_by_code().times(0);

        // The click is still recorded on a cache hit.
        store
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(()));

        let service = RedirectService::new(
            Arc::new(store),
            Arc::new(HitCache("https://cached.example.com".to_string())),
        );

        let destination = service.resolve("abc123").await.unwrap();
        assert_eq!(destination, "https://cached.example.com");
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(
            ensure_scheme("https://example.com".to_string()),
            "https://example.com"
        );
        assert_eq!(
            ensure_scheme("http://example.com".to_string()),
            "http://example.com"
        );
        assert_eq!(
            ensure_scheme("example.com".to_string()),
            "https://example.com"
        );
    }
}
