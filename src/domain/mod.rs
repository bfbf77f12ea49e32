//! Domain layer containing the student entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures and the partial-update merge rule
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on HTTP or on a concrete database
//! engine. Handlers talk to storage only through
//! [`repositories::StudentRepository`].

pub mod entities;
pub mod repositories;
