//! SQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every statement.
//!
//! # Repositories
//!
//! - [`SqliteStudentRepository`] - Student storage and retrieval

pub mod sqlite_student_repository;

pub use sqlite_student_repository::SqliteStudentRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations from `./migrations`.
///
/// Creating the `students` table is idempotent, so running this on every
/// startup is safe.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
