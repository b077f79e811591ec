//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// ```rust
    /// # use http::Method;
    /// # use nasadata_proxy::{Request, Response, Router};
    /// # async fn apod(_: Request) -> Response { Response::json("{}") }
    /// Router::new().on(Method::GET, "/api/apod", apod);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not valid `matchit` syntax or conflicts with an
    /// existing route. Routes are fixed at startup, so this is a programming
    /// error.
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(method, path, handler)
    }

    /// Shorthand for `on(Method::GET, …)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.add(Method::GET, path, handler)
    }

    fn add(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Finds the handler for a method + path pair.
    ///
    /// `HEAD` falls back to the `GET` route of the same path.
    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        self.find(method, path).or_else(|| {
            (method == Method::HEAD).then(|| self.find(&Method::GET, path)).flatten()
        })
    }

    fn find(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let matched = self.routes.get(method)?.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
