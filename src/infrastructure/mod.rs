//! Infrastructure layer: database, cache, and QR rendering integrations.
//!
//! Concrete implementations of the seams the application layer depends on:
//!
//! - [`persistence`] - PostgreSQL-backed link store
//! - [`cache`] - Redis redirect cache with a no-op fallback
//! - [`qr`] - QR artifact generation

pub mod cache;
pub mod persistence;
pub mod qr;
