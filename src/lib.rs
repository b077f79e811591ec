//! # nasadata-proxy
//!
//! A small HTTP proxy between a browser frontend and the NASA open APIs.
//! It keeps the API key server-side, fills in sensible defaults and opens
//! everything to any origin with CORS.
//!
//! ## Routes
//!
//! | Route | Query | Upstream |
//! |---|---|---|
//! | `GET /api/apod` | `date?` | `/planetary/apod` |
//! | `GET /api/mars-photos` | `earth_date?`, `camera?`, `page?` | `/mars-photos/api/v1/rovers/curiosity/photos` |
//! | `GET /api/neo` | `start_date?`, `end_date?` | `/neo/rest/v1/feed` |
//! | `GET /healthz`, `GET /readyz` | — | — |
//!
//! Every upstream call is a single GET with a 10 s timeout. Failures become
//! `500 {"error": <message>}`; an empty rover-photo page becomes a `404`
//! with suggestions.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use nasadata_proxy::{Config, NasaClient, Server, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nasadata_proxy::Error> {
//!     let config = Config::from_env()?;
//!     let api = Arc::new(NasaClient::from_config(&config)?);
//!
//!     Server::bind(&config.listen_addr()).await?
//!         .serve(routes::router(api))
//!         .await
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod upstream;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use upstream::{NasaClient, UpstreamApi, UpstreamError};
