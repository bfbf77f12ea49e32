//! Per-request deadline.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Duration;

use crate::error::AppError;

/// Runs the rest of the stack under a deadline.
///
/// When `limit` passes first the inner future is dropped, cancelling any
/// storage call still in flight, and the client gets a 503 error envelope.
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", student_routes())
///     .layer(middleware::from_fn_with_state(limit, timeout::deadline));
/// ```
pub async fn deadline(
    State(limit): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    tokio::time::timeout(limit, next.run(req))
        .await
        .map_err(|_| {
            tracing::warn!(
                %method,
                path,
                limit_ms = limit.as_millis() as u64,
                "request deadline exceeded"
            );
            AppError::Timeout(limit)
        })
}
