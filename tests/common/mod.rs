#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use snaplink::application::services::{LinkService, RedirectService};
use snaplink::domain::entities::{Link, NewLink};
use snaplink::domain::repositories::{LinkRepository, StoreError};
use snaplink::infrastructure::cache::NullCache;
use snaplink::infrastructure::qr::SvgQrGenerator;
use snaplink::state::AppState;
use snaplink::web::flash::Flash;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-signing-secret";

/// In-memory link store mirroring the Postgres semantics: a uniqueness
/// constraint on the short code and atomic click increments.
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds a link directly, bypassing the creation flow.
    pub fn seed(&self, code: &str, url: &str) {
        let link = Link::new(code.to_string(), url.to_string(), Utc::now(), 0);
        self.links.lock().unwrap().insert(code.to_string(), link);
    }

    /// Snapshot of a stored link.
    pub fn get(&self, code: &str) -> Option<Link> {
        self.links.lock().unwrap().get(code).cloned()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.short_code) {
            return Err(StoreError::DuplicateCode);
        }

        let link = Link::new(
            new_link.short_code.clone(),
            new_link.original_url,
            Utc::now(),
            0,
        );
        links.insert(new_link.short_code, link.clone());

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError> {
        // Incrementing an unknown code is a no-op, like an UPDATE matching
        // zero rows.
        if let Some(link) = self.links.lock().unwrap().get_mut(code) {
            link.clicks += 1;
        }

        Ok(())
    }
}

/// Builds an application state over the in-memory store, returning the store
/// handle for assertions.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let store = Arc::new(InMemoryLinkRepository::new());
    let cache = Arc::new(NullCache::new());

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        Arc::new(SvgQrGenerator::new()),
    ));
    let redirect_service = Arc::new(RedirectService::new(store.clone(), cache.clone()));

    let state = AppState::new(
        store.clone(),
        link_service,
        redirect_service,
        cache,
        Flash::new(TEST_SECRET),
    );

    (state, store)
}
