//! HTTP request handlers.

mod health;
mod index;
mod redirect;
mod shorten;

pub use health::health_handler;
pub use index::{IndexTemplate, ShortenResult, index_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
