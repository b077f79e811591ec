//! `GET /api/neo` — near-Earth-object feed.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::upstream::{Endpoint, UpstreamApi};

use super::{forward, upstream_failure};

/// Forwards `start_date` and `end_date` untouched. Upstream picks the range
/// when they are missing and rejects ranges it does not like.
pub async fn handle(api: Arc<dyn UpstreamApi>, req: Request) -> Response {
    let params = forward(&req, &["start_date", "end_date"]);
    match api.get(Endpoint::NeoFeed, &params).await {
        Ok(body) => Response::json(body),
        Err(e) => upstream_failure(e),
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;
    use crate::routes::stub::StubApi;
    use crate::upstream::UpstreamError;

    const FEED: &str = r#"{"element_count":1,"near_earth_objects":{"2024-01-01":[{"id":"3542519","name":"(2010 PK9)"}]}}"#;

    #[tokio::test]
    async fn range_is_forwarded_and_feed_returned_verbatim() {
        let stub = Arc::new(StubApi::ok(FEED));
        let res = handle(stub.clone(), Request::get("/api/neo?start_date=2024-01-01&end_date=2024-01-02")).await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), FEED.as_bytes());
        assert_eq!(
            stub.last_call(),
            (
                Endpoint::NeoFeed,
                vec![("start_date", "2024-01-01".to_owned()), ("end_date", "2024-01-02".to_owned())],
            )
        );
    }

    #[tokio::test]
    async fn nothing_is_defaulted() {
        let stub = Arc::new(StubApi::ok(FEED));
        handle(stub.clone(), Request::get("/api/neo")).await;
        assert!(stub.last_call().1.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_500() {
        let stub = Arc::new(StubApi::failing(UpstreamError::Transport(
            "error sending request: operation timed out".into(),
        )));
        let res = handle(stub, Request::get("/api/neo")).await;

        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"], "error sending request: operation timed out");
    }
}
