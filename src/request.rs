//! Incoming HTTP request view.
//!
//! By the time a handler runs, the body has already been collected and the
//! query string parsed — handlers see a plain value, no futures, no streams.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;

/// An incoming request as seen by a route handler.
pub struct Request {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        parts: http::request::Parts,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        let query = parts.uri.query().map(parse_query).unwrap_or_default();
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            query,
            headers: parts.headers,
            body,
            params,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Header lookup; names are matched case-insensitively by `http`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns
    /// `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns a query-string parameter, percent-decoded.
    ///
    /// `None` means the parameter is absent. `?name=` yields `Some("")` —
    /// presence and emptiness are distinct.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Deserializes the body as JSON. `None` on an empty or malformed body.
    pub fn json_body<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }
}

fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Percent-decoding plus `+` → space. Invalid escapes pass through verbatim.
fn decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: Option<&u8>) -> Option<u8> {
    b.and_then(|b| (*b as char).to_digit(16)).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(uri: &str) -> Request {
        let (parts, _) = http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        Request::new(parts, Bytes::new(), HashMap::new())
    }

    #[test]
    fn query_parameter_lookup() {
        let r = req("/api/hello?name=Ada&lang=en");
        assert_eq!(r.query("name"), Some("Ada"));
        assert_eq!(r.query("lang"), Some("en"));
        assert_eq!(r.query("missing"), None);
    }

    #[test]
    fn empty_value_is_present_not_absent() {
        let r = req("/api/hello?name=");
        assert_eq!(r.query("name"), Some(""));
    }

    #[test]
    fn query_values_are_decoded() {
        let r = req("/api/hello?name=Craig%20Barkley&alt=a+b");
        assert_eq!(r.query("name"), Some("Craig Barkley"));
        assert_eq!(r.query("alt"), Some("a b"));
    }

    #[test]
    fn invalid_escape_passes_through() {
        let r = req("/x?v=50%");
        assert_eq!(r.query("v"), Some("50%"));
    }

    #[test]
    fn json_body_tolerates_garbage() {
        let (parts, _) = http::Request::builder()
            .uri("/api/data")
            .body(())
            .unwrap()
            .into_parts();
        let r = Request::new(parts, Bytes::from_static(b"not json"), HashMap::new());
        assert!(r.json_body::<serde_json::Value>().is_none());
    }
}
