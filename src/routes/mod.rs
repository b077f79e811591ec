//! The proxy's HTTP surface.
//!
//! | Route | Upstream | Shape |
//! |---|---|---|
//! | `GET /api/apod` | picture of the day | body verbatim |
//! | `GET /api/mars-photos` | Curiosity rover photos | wrapped, `404` when empty |
//! | `GET /api/neo` | near-Earth-object feed | body verbatim |
//!
//! Any upstream failure becomes `500 {"error": <message>}`.

pub mod apod;
pub mod mars_photos;
pub mod neo;

use std::sync::Arc;

use http::StatusCode;
use serde::Serialize;

use crate::health;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::upstream::{FALLBACK_MESSAGE, UpstreamApi, UpstreamError};

/// Builds the full application router around one shared upstream client.
pub fn router(api: Arc<dyn UpstreamApi>) -> Router {
    Router::new()
        .get("/api/apod", {
            let api = Arc::clone(&api);
            move |req: Request| apod::handle(Arc::clone(&api), req)
        })
        .get("/api/mars-photos", {
            let api = Arc::clone(&api);
            move |req: Request| mars_photos::handle(Arc::clone(&api), req)
        })
        .get("/api/neo", move |req: Request| neo::handle(Arc::clone(&api), req))
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

/// Body of every `500`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Flattens any upstream failure into `500 {"error": ...}`.
///
/// The kind was already logged by the client; only the message survives.
pub(crate) fn upstream_failure(e: UpstreamError) -> Response {
    let mut error = e.to_string();
    if error.is_empty() {
        error = FALLBACK_MESSAGE.to_string();
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error })).into_response()
}

/// Copies the named query parameters that are present, verbatim and in
/// `keys` order. Absent ones are left for upstream to default.
pub(crate) fn forward(req: &Request, keys: &[&'static str]) -> Vec<(&'static str, String)> {
    keys.iter()
        .filter_map(|&key| req.query(key).map(|v| (key, v.to_owned())))
        .collect()
}
