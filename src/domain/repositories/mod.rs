//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interface (trait) that abstracts data
//! access operations following the Repository pattern. The trait is
//! implemented by the concrete repository in the infrastructure layer.
//!
//! # Architecture
//!
//! - [`LinkRepository`] defines the contract for link storage
//! - The PostgreSQL implementation lives in `crate::infrastructure::persistence`
//! - A mock implementation is auto-generated via `mockall` for unit tests
//!
//! The store itself is the single source of truth for short-code uniqueness:
//! [`LinkRepository::insert`] must fail atomically on a duplicate code so that
//! concurrent creations can never race past a check-then-insert sequence.

pub mod link_repository;

pub use link_repository::{LinkRepository, StoreError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
