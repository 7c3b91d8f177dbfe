//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Every payload this service produces is JSON, so [`Response::json`] is the
//! whole happy path: hand it any `Serialize` value and it becomes a `200`
//! with the right content type.

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::StatusCode;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::error::Error;

/// An outgoing HTTP response.
///
/// ```rust
/// use kyu::Response;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Pong { ok: bool }
///
/// Response::json(&Pong { ok: true });
/// ```
pub struct Response {
    inner: http::Response<Full<Bytes>>,
}

impl Response {
    /// `200 OK` with a JSON body serialized from `payload`.
    pub fn json<T: Serialize>(payload: &T) -> Self {
        Self::json_with_status(StatusCode::OK, payload)
    }

    /// A JSON body with an explicit status code.
    pub fn json_with_status<T: Serialize>(status: StatusCode, payload: &T) -> Self {
        match serde_json::to_vec(payload) {
            Ok(body) => Self::from_bytes(status, body),
            // Serialization only fails for payloads that cannot be JSON at
            // all (e.g. non-string map keys); none of ours qualify, but the
            // failure still must not take the connection down.
            Err(e) => {
                error!("response serialization failed: {e}");
                Self::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// A status-only response with no body.
    pub fn status(code: StatusCode) -> Self {
        let mut inner = http::Response::new(Full::new(Bytes::new()));
        *inner.status_mut() = code;
        Self { inner }
    }

    fn from_bytes(status: StatusCode, body: Vec<u8>) -> Self {
        let mut inner = http::Response::new(Full::new(Bytes::from(body)));
        *inner.status_mut() = status;
        inner
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self { inner }
    }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        self.inner
    }
}

/// Conversion into an HTTP [`Response`].
///
/// Implemented for [`Response`] itself, for bare [`StatusCode`]s, and for
/// `Result<T, Error>` — which is how a fallible handler reaches the 500
/// path without writing it out by hand.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}

/// A handler fault becomes a structured 500. The full detail is logged
/// server-side; only the message text reaches the caller.
impl<T: IntoResponse> IntoResponse for Result<T, Error> {
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(e) => {
                error!(detail = ?e, "handler fault: {e}");
                Response::json_with_status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &serde_json::json!({
                        "error": "Something went wrong!",
                        "message": e.to_string(),
                    }),
                )
            }
        }
    }
}
