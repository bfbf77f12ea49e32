//! Handlers for student endpoints (create, read, list, update, delete).
//!
//! Each handler decodes and validates its input, makes one repository call and
//! maps the outcome to a response. Errors are returned as [`AppError`] and
//! rendered as the JSON error envelope.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::student::{
    CreateStudentRequest, IdResponse, StudentResponse, UpdateStudentRequest,
};
use crate::api::extract::{JsonBody, StudentId};
use crate::domain::entities::StudentPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a student.
///
/// # Endpoint
///
/// `POST /api/students`
///
/// # Request Body
///
/// ```json
/// { "name": "Ann", "email": "ann@x.com", "age": 21 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty, malformed, or fails
/// validation. Returns 500 if the record cannot be stored.
pub async fn create_student_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateStudentRequest>,
) -> Result<(StatusCode, Json<IdResponse>), AppError> {
    payload.validate()?;

    tracing::info!("creating a student");

    let id = state
        .students
        .create(payload.into_new_student())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to create student"))?;

    tracing::info!(id, "student created");

    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Returns a single student.
///
/// # Endpoint
///
/// `GET /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer, 404 if no such student exists.
pub async fn get_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    tracing::info!(id, "getting student");

    let student = state
        .students
        .find_by_id(id)
        .await
        .inspect_err(|e| tracing::error!(id, error = %e, "failed to get student"))?;

    Ok(Json(student.into()))
}

/// Returns every student.
///
/// # Endpoint
///
/// `GET /api/students`
///
/// An empty table yields `[]`.
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    tracing::info!("listing students");

    let students = state.students.list().await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Permanently deletes a student.
///
/// # Endpoint
///
/// `DELETE /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer, 404 if nothing was deleted.
pub async fn delete_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
) -> Result<Json<IdResponse>, AppError> {
    tracing::info!(id, "deleting student");

    let rows_affected = state.students.delete(id).await?;

    tracing::info!(id, rows_affected, "delete finished");

    if rows_affected == 0 {
        return Err(AppError::NotFound { id });
    }

    Ok(Json(IdResponse { id }))
}

/// Partially updates a student.
///
/// # Endpoint
///
/// `PUT /api/students/{id}` or `PATCH /api/students/{id}`
///
/// # Request Body
///
/// All fields are optional. Absent fields, `""` and `0` keep the stored value.
///
/// ```json
/// { "email": "new@x.com" }
/// ```
///
/// # Errors
///
/// Returns 400 for a bad id, body or field value, 404 if the student does
/// not exist.
pub async fn update_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateStudentRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let payload = payload.without_blank_fields();
    payload.validate()?;

    let patch = StudentPatch::from(payload);
    if patch.is_empty() {
        tracing::debug!(id, "update carries no changes");
    }

    tracing::info!(id, "updating student");

    let rows_affected = state
        .students
        .update(id, patch)
        .await
        .inspect_err(|e| tracing::error!(id, error = %e, "failed to update student"))?;

    tracing::info!(id, rows_affected, "update finished");

    Ok(Json(IdResponse { id }))
}
