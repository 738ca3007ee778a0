//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::infrastructure::qr::QrService;
use crate::utils::code_generator::{generate_random_code, validate_custom_code};
use crate::utils::url_normalizer::{is_valid_url, normalize_url};

/// Maximum random-code allocation attempts before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// A successfully created short link with its displayable artifacts.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    /// Full short URL, `https://{host}/{code}`.
    pub short_url: String,
    /// Base64-encoded QR image of the short URL.
    pub qr_image: String,
}

/// Service for creating shortened links.
///
/// Runs the creation sequence: normalize and validate the URL, resolve a
/// short code (custom or random with bounded collision retry), insert, then
/// build the short URL and request its QR artifact.
pub struct LinkService {
    store: Arc<dyn LinkRepository>,
    qr: Arc<dyn QrService>,
}

impl LinkService {
    /// Creates a new link service over the given store and QR collaborator.
    pub fn new(store: Arc<dyn LinkRepository>, qr: Arc<dyn QrService>) -> Self {
        Self { store, qr }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `host` - the host serving this request, used to build the short URL
    /// - `raw_url` - the submitted URL, normalized before validation
    /// - `custom_code` - optional custom short code
    ///
    /// # Code Resolution
    ///
    /// A custom code is format-validated and used as-is; its uniqueness is
    /// only enforced by the store at insert time. Without a custom code, a
    /// random code is generated, retrying on collision up to 5 attempts.
    /// The pre-check on the random path merely reduces collision probability;
    /// the store's constraint remains the source of truth, so an insert-time
    /// duplicate is still possible (and surfaced) under a concurrent race.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] - empty or invalid URL
    /// - [`AppError::InvalidCodeFormat`] - malformed custom code
    /// - [`AppError::CodeExhaustion`] - 5 consecutive random collisions
    /// - [`AppError::CodeInUse`] - insert hit the uniqueness constraint
    /// - [`AppError::Storage`] - any other storage fault
    /// - [`AppError::Qr`] - artifact generation failed
    pub async fn create_short_link(
        &self,
        host: &str,
        raw_url: &str,
        custom_code: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        let original_url = normalize_url(raw_url)
            .filter(|url| is_valid_url(url))
            .ok_or(AppError::InvalidUrl)?;

        let short_code = match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;
                custom
            }
            None => self.allocate_code().await?,
        };

        let link = self
            .store
            .insert(NewLink {
                short_code,
                original_url,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateCode => AppError::CodeInUse,
                other => AppError::Storage(other),
            })?;

        let short_url = self.short_url(host, &link.short_code);
        let qr_image = self.qr.generate(&short_url)?;

        Ok(CreatedLink {
            link,
            short_url,
            qr_image,
        })
    }

    /// Constructs the full short URL from a host and code.
    ///
    /// Always uses HTTPS.
    fn short_url(&self, host: &str, code: &str) -> String {
        format!("https://{}/{}", host.trim_end_matches('/'), code)
    }

    /// Allocates a random short code, retrying on collision.
    ///
    /// Fails after 5 colliding attempts without ever reaching insert.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_random_code();

            if self
                .store
                .find_by_code(&code)
                .await
                .map_err(AppError::Storage)?
                .is_none()
            {
                return Ok(code);
            }
        }

        Err(AppError::CodeExhaustion)
    }
}
