//! Application error type and its HTTP mapping.
//!
//! Every failure that crosses the repository/handler boundary is an [`AppError`].
//! Handlers return `Result<_, AppError>` and axum turns the error into a JSON
//! envelope through [`IntoResponse`]:
//!
//! ```json
//! { "status": "Error", "error": "no student found with id=7" }
//! ```
//!
//! Validation failures use the same envelope and additionally carry a
//! per-field breakdown under `fields`.

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Field name → list of reasons the field was rejected.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors produced while handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body was empty or not valid JSON for the expected payload.
    #[error("{0}")]
    Decode(String),

    /// One or more fields failed validation.
    #[error("{}", join_field_errors(.0))]
    Validation(FieldErrors),

    /// Path parameter could not be parsed as a student id.
    #[error("{0}")]
    Parse(String),

    /// No student exists with the given id.
    #[error("no student found with id={id}")]
    NotFound { id: i64 },

    /// Any other storage failure.
    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    /// The request ran past its deadline and was abandoned.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::Parse(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();

        for (field, errs) in errors.field_errors() {
            let reasons = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("failed '{}' check", e.code),
                })
                .collect();
            fields.insert(field.to_string(), reasons);
        }

        AppError::Validation(fields)
    }
}

fn join_field_errors(fields: &FieldErrors) -> String {
    fields
        .iter()
        .flat_map(|(field, reasons)| reasons.iter().map(move |r| format!("{field}: {r}")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error, fields) = match self {
            AppError::Query(e) => {
                // Driver details stay in the log.
                tracing::error!(error = %e, "storage error");
                ("storage error".to_string(), None)
            }
            AppError::Validation(fields) => (join_field_errors(&fields), Some(fields)),
            other => (other.to_string(), None),
        };

        let body = ErrorResponse {
            status: "Error",
            error,
            fields,
        };

        (status, Json(body)).into_response()
    }
}
