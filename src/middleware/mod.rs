//! Middleware layer.
//!
//! The cross-cutting concerns every route shares run here, around the
//! handler call in [`Server`](crate::Server) dispatch:
//!
//! - [`cors`] — answers preflights and opens every response to any origin
//! - [`trace`] — per-request span with method, path, status, latency

pub mod cors;
pub mod trace;
