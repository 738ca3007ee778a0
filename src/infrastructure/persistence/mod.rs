//! PostgreSQL persistence implementations of the domain repository traits.

mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
