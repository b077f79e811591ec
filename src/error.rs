//! Unified error type.

use thiserror::Error;

/// The error type returned by the proxy's fallible setup operations.
///
/// Application-level outcomes (404 for an empty photo page, 500 for a failed
/// upstream call) are expressed as HTTP [`Response`](crate::Response)
/// values, not as `Error`s. This type surfaces infrastructure failures:
/// loading configuration, building the upstream client, binding to a port
/// or accepting a connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
}
