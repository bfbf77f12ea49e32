#![allow(dead_code)]

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use students_api::api::handlers::health_handler;
use students_api::api::routes::student_routes;
use students_api::infrastructure::persistence::{MIGRATOR, SqliteStudentRepository};
use students_api::state::AppState;

/// Fresh in-memory database with the schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

/// File-backed database shared by several connections.
///
/// The returned [`TempDir`] owns the database file and must outlive the pool.
pub async fn file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("students.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    (dir, pool)
}

pub async fn insert_student(pool: &SqlitePool, name: &str, email: &str, age: i32) -> i64 {
    sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(age)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_students(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteStudentRepository {
    SqliteStudentRepository::new(Arc::new(pool))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_repository(pool)))
}

/// Application routes without the outer middleware stack.
pub fn create_test_app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", student_routes())
        .with_state(create_test_state(pool))
}
