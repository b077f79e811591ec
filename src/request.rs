//! Incoming HTTP request type.

use http::{HeaderMap, Method, Uri};

/// An incoming HTTP request, reduced to what the proxy routes read.
///
/// The proxy only serves `GET`/`HEAD`, so the body is never collected. Query
/// parameters are decoded once, up front, and stay immutable for the life
/// of the request.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) query: Vec<(String, String)>,
}

impl Request {
    pub(crate) fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        let query = uri
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { method, uri, headers, query }
    }

    pub(crate) fn from_hyper<B>(req: hyper::Request<B>) -> Self {
        let (parts, _body) = req.into_parts();
        Self::new(parts.method, parts.uri, parts.headers)
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a decoded query-string parameter, verbatim.
    ///
    /// `?date=2024-01-01` gives `Some("2024-01-01")`; `?date=` gives
    /// `Some("")`. When a key repeats, the first occurrence wins.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`query`](Request::query), but an empty value counts as absent.
    pub fn query_non_empty(&self, key: &str) -> Option<&str> {
        self.query(key).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
impl Request {
    /// A bare `GET` for handler tests.
    pub(crate) fn get(uri: &str) -> Self {
        let uri: Uri = uri.parse().expect("test uri");
        Self::new(Method::GET, uri, HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_query_parameters() {
        let req = Request::get("/api/mars-photos?earth_date=2024-01-01&camera=FHAZ%20A&page=");
        assert_eq!(req.path(), "/api/mars-photos");
        assert_eq!(req.query("earth_date"), Some("2024-01-01"));
        assert_eq!(req.query("camera"), Some("FHAZ A"));
        assert_eq!(req.query("page"), Some(""));
        assert_eq!(req.query_non_empty("page"), None);
        assert_eq!(req.query("missing"), None);
    }

    #[test]
    fn first_repeated_key_wins() {
        let req = Request::get("/api/apod?date=2024-01-01&date=2024-02-02");
        assert_eq!(req.query("date"), Some("2024-01-01"));
    }

    #[test]
    fn plus_decodes_to_space() {
        let req = Request::get("/api/mars-photos?camera=front+hazard");
        assert_eq!(req.query("camera"), Some("front hazard"));
    }

    #[test]
    fn no_query_string() {
        let req = Request::get("/api/neo");
        assert_eq!(req.query("start_date"), None);
        assert!(req.header("origin").is_none());
    }
}
