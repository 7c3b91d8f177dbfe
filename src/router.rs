//! Radix-tree request router.
//!
//! One [`matchit`] tree per HTTP method, O(path-length) lookup. Build the
//! table once at startup; registrations chain. Anything the table does not
//! match becomes the structured 404 body.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::Method;
use http_body_util::Full;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::routes;

/// The application route table.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a `GET` handler. Returns `self` for chaining.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Registers a `POST` handler. Returns `self` for chaining.
    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    /// Registers a handler for an arbitrary method + path pair.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting path pattern — route tables are
    /// static, so this is a programming error caught at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    fn lookup(&self, method: &Method, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one fully-collected request to a response.
    ///
    /// This is the entire request path minus the socket: the server calls it
    /// per request, and tests call it directly to exercise the HTTP surface
    /// without binding a port.
    pub async fn respond(&self, req: http::Request<Bytes>) -> http::Response<Full<Bytes>> {
        let (parts, body) = req.into_parts();
        let path = parts.uri.path().to_owned();

        let response = match self.lookup(&parts.method, &path) {
            Some((handler, params)) => handler.call(Request::new(parts, body, params)).await,
            None => routes::not_found(&path),
        };

        response.into_inner()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
