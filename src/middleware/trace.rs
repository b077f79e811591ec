//! Per-request tracing.

use std::time::{Duration, Instant};

use http::Method;
use tracing::{Span, info, info_span, warn};

use crate::response::Response;

/// Opens the span every log line of one request is recorded under.
pub fn request_span(method: &Method, path: &str) -> Span {
    info_span!("request", %method, path)
}

/// Logs the outcome of a request once its response is final.
///
/// Server errors are logged at `warn`; the handler has already logged the
/// cause at `error`.
pub fn record(res: &Response, started: Instant) {
    let status = res.status_code().as_u16();
    let latency_ms = millis(started.elapsed());
    if res.status_code().is_server_error() {
        warn!(status, latency_ms, "request failed");
    } else {
        info!(status, latency_ms, "request completed");
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
