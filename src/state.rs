//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;
use crate::web::flash::Flash;

/// Application state shared across request handlers.
///
/// Every dependency is an explicitly constructed handle, never process-wide
/// state, so tests can assemble a state over in-memory doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LinkRepository>,
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub cache: Arc<dyn CacheService>,
    pub flash: Flash,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LinkRepository>,
        link_service: Arc<LinkService>,
        redirect_service: Arc<RedirectService>,
        cache: Arc<dyn CacheService>,
        flash: Flash,
    ) -> Self {
        Self {
            store,
            link_service,
            redirect_service,
            cache,
            flash,
        }
    }
}
