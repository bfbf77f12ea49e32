//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for student records.
///
/// Handlers depend only on this trait, so the SQL engine can be swapped for a
/// test double without touching handler code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStudentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_student.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persists a new student and returns the id assigned by storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Query`] if the write cannot be committed.
    async fn create(&self, new_student: NewStudent) -> Result<i64, AppError>;

    /// Fetches a single student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Returns [`AppError::Query`] on any other read failure.
    async fn find_by_id(&self, id: i64) -> Result<Student, AppError>;

    /// Returns every stored student.
    ///
    /// No particular order is promised. An empty table yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Query`] on database errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Permanently deletes a student and returns the number of rows removed.
    ///
    /// Deleting an id that does not exist is not an error: `Ok(0)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Query`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Merges `patch` onto the stored record and persists the result.
    ///
    /// Unset patch fields keep their stored values (see
    /// [`Student::merge`]). Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` does not exist; nothing is written.
    /// Returns [`AppError::Query`] on database errors.
    async fn update(&self, id: i64, patch: StudentPatch) -> Result<u64, AppError>;

    /// Performs a trivial round-trip to check that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Query`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
