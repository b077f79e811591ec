//! The one outbound call every proxy route makes.
//!
//! [`UpstreamApi`] is the seam between the route handlers and the network:
//! [`NasaClient`] implements it with reqwest, tests implement it with a stub.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::Error;

/// Fixed bound on every upstream call, connect to last byte.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// The rover whose photos the proxy serves.
pub const ROVER: &str = "curiosity";

/// Message used when upstream fails without saying why.
pub const FALLBACK_MESSAGE: &str = "NASA API Error";

/// The upstream endpoints the proxy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Astronomy Picture of the Day
    Apod,
    /// Photos taken by [`ROVER`]
    RoverPhotos,
    /// Near-Earth-object feed for a date range
    NeoFeed,
}

impl Endpoint {
    /// Path relative to the upstream base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Apod        => "/planetary/apod",
            Self::RoverPhotos => "/mars-photos/api/v1/rovers/curiosity/photos",
            Self::NeoFeed     => "/neo/rest/v1/feed",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apod        => "apod",
            Self::RoverPhotos => "rover-photos",
            Self::NeoFeed     => "neo-feed",
        })
    }
}

/// Why an upstream call produced no usable body.
///
/// Clients only ever see the message; the kind is kept for logs and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// Connect failure, timeout, or a body cut short.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Upstream answered 2xx with a body the proxy could not read.
    #[error("{0}")]
    Decode(String),
}

/// Query parameters for one upstream call, in the order they are sent.
pub type Params = [(&'static str, String)];

#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Issues one GET to `endpoint` with `params` plus the API key, and
    /// returns the raw success body. No retries.
    async fn get(&self, endpoint: Endpoint, params: &Params) -> Result<Bytes, UpstreamError>;
}

/// reqwest-backed client for `api.nasa.gov`.
#[derive(Clone)]
pub struct NasaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, api_key, UPSTREAM_TIMEOUT)
    }

    /// Create client with a custom timeout (for testing).
    pub fn with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.nasa_api_base_url, &config.nasa_api_key)
    }
}

#[async_trait]
impl UpstreamApi for NasaClient {
    async fn get(&self, endpoint: Endpoint, params: &Params) -> Result<Bytes, UpstreamError> {
        debug!(%endpoint, ?params, "calling upstream");

        let result = self.fetch(endpoint, params).await;
        if let Err(e) = &result {
            error!(%endpoint, "NASA API error: {e}");
        }
        result
    }
}

impl NasaClient {
    async fn fetch(&self, endpoint: Endpoint, params: &Params) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint.path()))
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }
        Ok(body)
    }
}

/// Flattens a reqwest error and its causes into one line.
///
/// The URL is stripped first: it carries the API key in its query string.
fn transport(e: reqwest::Error) -> UpstreamError {
    let e = e.without_url();
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    UpstreamError::Transport(message)
}

/// Picks the human-readable message out of an upstream error body.
///
/// The NASA gateway reports `{"msg": ...}`; the api.data.gov key layer in
/// front of it reports `{"error": {"message": ...}}`.
fn api_error_message(body: &[u8]) -> String {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => return FALLBACK_MESSAGE.to_string(),
    };

    value.get("msg")
        .and_then(Value::as_str)
        .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}
