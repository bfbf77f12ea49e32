//! Request spans and access logging.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// One `INFO` span per request, with method and path.
///
/// Each response logs its status and latency in milliseconds. Storage
/// failures (500) and deadline hits (503) are also logged at `ERROR`:
///
/// ```text
/// INFO request{method=GET uri=/api/students/1 version=HTTP/1.1}: finished processing request latency=2 ms status=200
/// ERROR request{method=GET uri=/api/students version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=4 ms
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
