//! Application layer containing business logic services.
//!
//! Services orchestrate domain operations over injected repository and
//! collaborator handles. See [`services`].

pub mod services;
