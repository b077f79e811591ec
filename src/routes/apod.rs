//! `GET /api/apod` — Astronomy Picture of the Day.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::upstream::{Endpoint, UpstreamApi};

use super::{forward, upstream_failure};

/// Forwards `date` as given; without it upstream serves today's picture.
pub async fn handle(api: Arc<dyn UpstreamApi>, req: Request) -> Response {
    let params = forward(&req, &["date"]);
    match api.get(Endpoint::Apod, &params).await {
        Ok(body) => Response::json(body),
        Err(e) => upstream_failure(e),
    }
}
