//! Core domain entities representing the business data model.
//!
//! The service persists exactly one entity: [`Link`], the mapping between a
//! short code and its destination URL. Entities are plain data structures
//! without business logic.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries only caller-supplied fields; `created_at` and `clicks`
//! are set by the store at insert time.

pub mod link;

pub use link::{Link, NewLink};
