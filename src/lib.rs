//! # Students API
//!
//! A small CRUD service for student records built with Axum and SQLx.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The student entity, the partial-update
//!   merge rule and the storage trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository and
//!   schema migrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Endpoints
//!
//! | Method        | Path                  | Success          |
//! |---------------|-----------------------|------------------|
//! | `POST`        | `/api/students`       | 201 `{"id": ..}` |
//! | `GET`         | `/api/students`       | 200 list         |
//! | `GET`         | `/api/students/{id}`  | 200 student      |
//! | `PUT`/`PATCH` | `/api/students/{id}`  | 200 `{"id": ..}` |
//! | `DELETE`      | `/api/students/{id}`  | 200 `{"id": ..}` |
//! | `GET`         | `/health`             | 200 health report |
//!
//! Errors use the envelope `{"status": "Error", "error": "<message>"}`.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://storage/students.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{NewStudent, Student, StudentPatch};
    pub use crate::domain::repositories::StudentRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteStudentRepository;
    pub use crate::state::AppState;
}
