//! SQLite implementation of the student repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// Raw row shape of the `students` table.
#[derive(Debug, FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    age: i32,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student::new(r.id, r.name, r.email, r.age)
    }
}

/// SQLite repository for student records.
///
/// The pool is created once at startup and shared by every request.
pub struct SqliteStudentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(&new_student.name)
            .bind(&new_student.email)
            .bind(new_student.age)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Student::from).ok_or(AppError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows =
            sqlx::query_as::<_, StudentRow>("SELECT id, name, email, age FROM students ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, patch: StudentPatch) -> Result<u64, AppError> {
        // IMMEDIATE takes the write lock up front: concurrent updates queue on
        // the busy timeout instead of failing when a reader tries to upgrade.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(existing) = existing else {
            tx.rollback().await?;
            return Err(AppError::NotFound { id });
        };

        let merged = Student::from(existing).merge(patch);

        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&merged.name)
            .bind(&merged.email)
            .bind(merged.age)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
