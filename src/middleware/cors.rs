//! Permissive CORS, the browser-facing half of the proxy.
//!
//! The frontend is served from a different origin than the proxy, so every
//! response allows any origin. Preflights never reach a handler.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_HEADERS, HeaderValue, VARY,
};
use http::{Method, StatusCode};

use crate::request::Request;
use crate::response::Response;

pub const ALLOW_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Answers an `OPTIONS` preflight, or returns `None` for any other request.
///
/// Requested headers are reflected back verbatim, so custom client headers
/// are always accepted.
pub fn preflight(req: &Request) -> Option<Response> {
    if req.method() != Method::OPTIONS {
        return None;
    }

    let mut res = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ACCESS_CONTROL_ALLOW_METHODS.as_str(), ALLOW_METHODS)
        .no_body();

    if let Some(requested) = req.headers().get(ACCESS_CONTROL_REQUEST_HEADERS) {
        let headers = res.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        headers.append(VARY, HeaderValue::from_static("access-control-request-headers"));
    }

    Some(res)
}

/// Stamps `access-control-allow-origin: *` on an outgoing response.
pub fn allow_any_origin(res: &mut Response) {
    res.headers_mut()
        .entry(ACCESS_CONTROL_ALLOW_ORIGIN)
        .or_insert(HeaderValue::from_static("*"));
}
