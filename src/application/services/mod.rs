//! Business logic services.
//!
//! - [`LinkService`] - link creation orchestration (validation, code
//!   allocation with bounded collision retry, insert, QR artifact)
//! - [`RedirectService`] - redirect resolution with click accounting
//!
//! Services receive their store, cache, and QR handles as explicit
//! constructor arguments rather than reaching for process-wide state, so
//! tests can inject doubles.

mod link_service;
mod redirect_service;

pub use link_service::{CreatedLink, LinkService};
pub use redirect_service::RedirectService;
