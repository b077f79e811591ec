//! HTTP server and graceful shutdown.
//!
//! # Graceful shutdown
//!
//! On **SIGTERM** (container stop) or **SIGINT** (Ctrl-C) the server:
//! 1. stops `listener.accept()` — no new connections are made,
//! 2. lets every in-flight connection run to completion, including any
//!    upstream call still waiting on its 10 s timeout,
//! 3. returns from [`Server::serve`], which lets `main` exit cleanly.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, HeaderValue};
use http::{Method, StatusCode};
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info};

use crate::error::Error;
use crate::handler::BoxedHandler;
use crate::middleware::{cors, trace};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds a listener on `addr` (`host:port`). Host names such as
    /// `localhost` are resolved.
    pub async fn bind(addr: &str) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    /// Wraps an already-bound listener, e.g. one on port 0 in tests.
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { listener }
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Like [`serve`](Server::serve), but drains and returns when `signal`
    /// resolves instead of waiting for a process signal.
    pub async fn serve_with_shutdown<S>(self, router: Router, signal: S) -> Result<(), Error>
    where
        S: Future<Output = ()> + Send,
    {
        let addr = self.listener.local_addr()?;
        let router = Arc::new(router);

        info!(%addr, "nasadata-proxy listening");

        // Tracks every connection task so shutdown can wait for them.
        let mut tasks = tokio::task::JoinSet::new();

        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Shutdown is checked first so a SIGTERM stops accepting
                // immediately, even with connections queued.
                biased;

                () = &mut signal => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = self.listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req).await }
                        });

                        // Serves HTTP/1.1 or HTTP/2, whichever the client speaks.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the set stays small.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("nasadata-proxy stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Hyper entry point. Every failure is already a [`Response`] by the time
/// it gets here, so hyper never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let span = trace::request_span(req.method(), req.uri().path());
    let response = async move {
        let started = Instant::now();
        let handler = router.lookup(req.method(), req.uri().path());
        let res = handle(handler, Request::from_hyper(req)).await;
        trace::record(&res, started);
        res
    }
    .instrument(span)
    .await;

    Ok(response.into_inner())
}

/// Middleware and routing, independent of the transport.
async fn handle(handler: Option<BoxedHandler>, req: Request) -> Response {
    let head = req.method() == Method::HEAD;
    let mut res = match cors::preflight(&req) {
        Some(preflight) => preflight,
        None => match handler {
            Some(handler) => handler.call(req).await,
            None => Response::status(StatusCode::NOT_FOUND),
        },
    };
    cors::allow_any_origin(&mut res);
    if head {
        strip_body(&mut res);
    }
    res
}

/// A `HEAD` answer keeps the `GET` headers, including the length of the
/// body it leaves out.
fn strip_body(res: &mut Response) {
    if !res.body.is_empty() {
        res.headers.insert(CONTENT_LENGTH, HeaderValue::from(res.body.len()));
        res.body = Bytes::new();
    }
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT the process receives.
/// On non-Unix platforms only Ctrl-C is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
