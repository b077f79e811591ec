//! `GET /api/mars-photos` — Curiosity rover photos for one Earth date.
//!
//! Unlike the other routes this one reshapes the upstream answer: the photo
//! list is wrapped with the resolved query, and an empty list is a `404`
//! with hints instead of an empty `200`.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::upstream::{Endpoint, UpstreamApi, UpstreamError};

use super::upstream_failure;

/// Photos upstream returns per page.
pub const PAGE_SIZE: usize = 25;

pub const NO_PHOTOS: &str = "No photos found";

pub const SUGGESTIONS: [&str; 3] = [
    "Try a different date",
    "Try a different camera",
    "Check if the date is within the rover mission duration",
];

/// The query after defaulting, exactly as sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub earth_date: String,
    pub camera: Option<String>,
    pub page: String,
}

impl PhotoQuery {
    /// Reads the query string, defaulting `earth_date` to the day before
    /// `today` and `page` to `1`. Empty values count as missing for both.
    pub fn from_request(req: &Request, today: NaiveDate) -> Self {
        Self {
            earth_date: req
                .query_non_empty("earth_date")
                .map(str::to_owned)
                .unwrap_or_else(|| default_earth_date(today)),
            camera: req.query("camera").map(str::to_owned),
            page: req.query_non_empty("page").unwrap_or("1").to_owned(),
        }
    }

    fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("earth_date", self.earth_date.clone())];
        if let Some(camera) = &self.camera {
            params.push(("camera", camera.clone()));
        }
        params.push(("page", self.page.clone()));
        params
    }

    fn not_found_message(&self) -> String {
        match self.camera.as_deref().filter(|c| !c.is_empty()) {
            Some(camera) => format!("No Mars photos available for {} with camera {camera}", self.earth_date),
            None => format!("No Mars photos available for {}", self.earth_date),
        }
    }
}

/// Yesterday relative to `today`, as `yyyy-MM-dd`.
pub fn default_earth_date(today: NaiveDate) -> String {
    today.pred_opt().unwrap_or(today).format("%Y-%m-%d").to_string()
}

/// The part of the upstream answer this route reads.
#[derive(Debug, Deserialize)]
struct PhotoPage {
    #[serde(default)]
    photos: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct PhotosBody {
    photos: Vec<Value>,
    /// True when a full page came back. Upstream has no continuation
    /// token, so a final page of exactly 25 still reports `true`.
    #[serde(rename = "hasMore")]
    has_more: bool,
    earth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    camera: Option<String>,
}

#[derive(Debug, Serialize)]
struct NoPhotosBody {
    error: &'static str,
    message: String,
    suggestions: [&'static str; 3],
}

pub async fn handle(api: Arc<dyn UpstreamApi>, req: Request) -> Response {
    let query = PhotoQuery::from_request(&req, Local::now().date_naive());
    fetch(api.as_ref(), query).await
}

async fn fetch(api: &dyn UpstreamApi, query: PhotoQuery) -> Response {
    let body = match api.get(Endpoint::RoverPhotos, &query.upstream_params()).await {
        Ok(body) => body,
        Err(e) => return upstream_failure(e),
    };

    let page: PhotoPage = match serde_json::from_slice(&body) {
        Ok(page) => page,
        Err(e) => {
            warn!("unreadable rover photo page: {e}");
            return upstream_failure(UpstreamError::Decode(e.to_string()));
        }
    };

    let photos = page.photos.unwrap_or_default();
    if photos.is_empty() {
        warn!(earth_date = %query.earth_date, camera = ?query.camera, "no rover photos");
        let body = NoPhotosBody {
            error: NO_PHOTOS,
            message: query.not_found_message(),
            suggestions: SUGGESTIONS,
        };
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    Json(PhotosBody {
        has_more: photos.len() >= PAGE_SIZE,
        photos,
        earth_date: query.earth_date,
        camera: query.camera,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::routes::stub::StubApi;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn page_of(n: usize) -> String {
        let photos: Vec<Value> = (0..n)
            .map(|i| json!({ "id": i, "img_src": format!("https://mars.nasa.gov/{i}.jpg") }))
            .collect();
        json!({ "photos": photos }).to_string()
    }

    fn body_of(res: &Response) -> Value {
        serde_json::from_slice(res.body()).unwrap()
    }

    #[test]
    fn defaults_to_yesterday_and_first_page() {
        let query = PhotoQuery::from_request(&Request::get("/api/mars-photos"), date("2024-03-01"));
        assert_eq!(query.earth_date, "2024-02-29");
        assert_eq!(query.page, "1");
        assert_eq!(query.camera, None);
    }

    #[test]
    fn default_date_crosses_year_boundary() {
        assert_eq!(default_earth_date(date("2025-01-01")), "2024-12-31");
    }

    #[test]
    fn empty_values_take_the_default() {
        let req = Request::get("/api/mars-photos?earth_date=&page=");
        let query = PhotoQuery::from_request(&req, date("2024-01-10"));
        assert_eq!(query.earth_date, "2024-01-09");
        assert_eq!(query.page, "1");
    }

    #[test]
    fn explicit_values_are_kept_verbatim() {
        let req = Request::get("/api/mars-photos?earth_date=2015-6-3&camera=FHAZ&page=3");
        let query = PhotoQuery::from_request(&req, date("2024-01-10"));
        assert_eq!(
            query.upstream_params(),
            vec![
                ("earth_date", "2015-6-3".to_owned()),
                ("camera", "FHAZ".to_owned()),
                ("page", "3".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn handler_sends_defaults_upstream() {
        let stub = Arc::new(StubApi::ok(&page_of(1)));
        let yesterday = default_earth_date(Local::now().date_naive());

        let res = handle(stub.clone(), Request::get("/api/mars-photos")).await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(
            stub.last_call(),
            (Endpoint::RoverPhotos, vec![("earth_date", yesterday.clone()), ("page", "1".to_owned())])
        );
        let body = body_of(&res);
        assert_eq!(body["earth_date"], yesterday);
        assert!(body.get("camera").is_none());
    }

    #[tokio::test]
    async fn empty_page_is_404_with_three_suggestions() {
        let stub = StubApi::ok(r#"{"photos":[]}"#);
        let query = PhotoQuery::from_request(
            &Request::get("/api/mars-photos?earth_date=2024-01-01&camera=MAST"),
            date("2024-06-01"),
        );

        let res = fetch(&stub, query).await;

        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(&res),
            json!({
                "error": "No photos found",
                "message": "No Mars photos available for 2024-01-01 with camera MAST",
                "suggestions": SUGGESTIONS,
            })
        );
    }

    #[tokio::test]
    async fn missing_photo_list_is_404_without_camera_in_message() {
        let stub = StubApi::ok(r#"{"unexpected":true}"#);
        let query = PhotoQuery::from_request(&Request::get("/api/mars-photos?earth_date=2024-01-01"), date("2024-06-01"));

        let res = fetch(&stub, query).await;

        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        let body = body_of(&res);
        assert_eq!(body["message"], "No Mars photos available for 2024-01-01");
        assert_eq!(body["suggestions"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn partial_page_has_no_more() {
        let stub = StubApi::ok(&page_of(24));
        let query = PhotoQuery::from_request(&Request::get("/api/mars-photos?camera=NAVCAM"), date("2024-06-01"));

        let body = body_of(&fetch(&stub, query).await);

        assert_eq!(body["hasMore"], false);
        assert_eq!(body["photos"].as_array().map(Vec::len), Some(24));
        assert_eq!(body["earth_date"], "2024-05-31");
        assert_eq!(body["camera"], "NAVCAM");
    }

    #[tokio::test]
    async fn full_page_has_more() {
        for n in [PAGE_SIZE, PAGE_SIZE + 1] {
            let stub = StubApi::ok(&page_of(n));
            let query = PhotoQuery::from_request(&Request::get("/api/mars-photos"), date("2024-06-01"));
            let body = body_of(&fetch(&stub, query).await);
            assert_eq!(body["hasMore"], true, "{n} photos");
        }
    }

    #[tokio::test]
    async fn non_json_success_is_500() {
        let stub = StubApi::ok("<html>maintenance</html>");
        let query = PhotoQuery::from_request(&Request::get("/api/mars-photos"), date("2024-06-01"));

        let res = fetch(&stub, query).await;

        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_of(&res)["error"].as_str().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn upstream_error_is_500() {
        let stub = StubApi::failing(UpstreamError::Api { status: 429, message: "OVER_RATE_LIMIT".into() });
        let query = PhotoQuery::from_request(&Request::get("/api/mars-photos"), date("2024-06-01"));

        let res = fetch(&stub, query).await;

        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(&res), json!({ "error": "OVER_RATE_LIMIT" }));
    }
}
