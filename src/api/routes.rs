//! API route configuration.

use crate::api::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    update_student_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Student resource routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /students`        - Create a student
/// - `GET    /students`        - List all students
/// - `GET    /students/{id}`   - Fetch one student
/// - `PUT    /students/{id}`   - Partially update a student
/// - `PATCH  /students/{id}`   - Same as `PUT`
/// - `DELETE /students/{id}`   - Permanently delete a student
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            post(create_student_handler).get(list_students_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .patch(update_student_handler)
                .delete(delete_student_handler),
        )
}
