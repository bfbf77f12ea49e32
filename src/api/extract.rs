//! Request extractors producing [`AppError`] rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that rejects with the API error envelope.
///
/// Unlike [`axum::Json`] it does not require a `Content-Type` header, and
/// both an empty body and malformed JSON become [`AppError::Decode`] (400).
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Decode(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::Decode("empty body".to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::Decode(format!("invalid request body: {e}")))
    }
}

/// Student id taken from the `{id}` path segment.
///
/// Runs on request parts, so handlers listing it before [`JsonBody`] report a
/// bad id before touching the body.
#[derive(Debug, Clone, Copy)]
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Parse(e.body_text()))?;

        parse_id(&raw).map(StudentId)
    }
}

/// Parses a student id path segment as a base-10 `i64`.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|e| AppError::Parse(format!("invalid student id '{raw}': {e}")))
}
