//! The JSON route handlers.
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | GET | `/` | welcome banner |
//! | GET | `/health` | status + process uptime |
//! | GET | `/api/hello` | greeting for `?name=`, default `"Anonymous"` |
//! | POST | `/api/data` | echo of the submitted JSON |
//!
//! Every body carries a `timestamp` field regenerated at handling time.
//! Handlers hold no cross-request state; the one shared value is the
//! process start instant in [`AppState`], read by the health check.

use std::sync::Arc;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Fallback user for `/api/hello` when no `name` parameter is supplied.
pub const ANONYMOUS_USER: &str = "Anonymous";

const WELCOME_MESSAGE: &str = "Welcome to the server!";
const HELLO_MESSAGE: &str = "Hello from the API!";
const DATA_RECEIVED_MESSAGE: &str = "Data received successfully";

/// Per-process state shared by the handlers.
pub struct AppState {
    started: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }

    /// Elapsed seconds since the state was created. Monotonically
    /// non-decreasing within one process lifetime.
    fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the full route table over `state`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .get("/", welcome)
        .get("/health", move |req: Request| {
            let state = Arc::clone(&state);
            async move { health(req, &state) }
        })
        .get("/api/hello", hello)
        .post("/api/data", receive_data)
}

/// RFC 3339 UTC with millisecond precision, e.g. `2026-08-25T12:00:00.000Z`.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Payloads ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Welcome {
    message: &'static str,
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
    uptime: f64,
    timestamp: String,
}

#[derive(Serialize)]
struct HelloReply {
    message: &'static str,
    data: HelloData,
}

#[derive(Serialize)]
struct HelloData {
    user: String,
    timestamp: String,
}

/// What `POST /api/data` accepts. Both fields optional; an absent or
/// malformed body deserializes to the default (all `None`).
#[derive(Default, Deserialize)]
struct DataSubmission {
    message: Option<String>,
    data: Option<Value>,
}

#[derive(Serialize)]
struct DataReceipt {
    message: String,
    #[serde(rename = "receivedData", skip_serializing_if = "Option::is_none")]
    received_data: Option<Value>,
    timestamp: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn welcome(_req: Request) -> Response {
    Response::json(&Welcome {
        message: WELCOME_MESSAGE,
        status: "running",
        timestamp: now(),
    })
}

fn health(_req: Request, state: &AppState) -> Response {
    Response::json(&HealthReport {
        status: "healthy",
        uptime: state.uptime_seconds(),
        timestamp: now(),
    })
}

/// Absence falls back to [`ANONYMOUS_USER`]; a present-but-empty `name`
/// is preserved as-is.
async fn hello(req: Request) -> Response {
    let user = req.query("name").unwrap_or(ANONYMOUS_USER).to_owned();
    Response::json(&HelloReply {
        message: HELLO_MESSAGE,
        data: HelloData { user, timestamp: now() },
    })
}

/// Echoes the submitted JSON. A missing or unparseable body is not an
/// error: the message falls back to its default and `receivedData` is
/// omitted from the reply.
async fn receive_data(req: Request) -> Response {
    let submission: DataSubmission = req.json_body().unwrap_or_default();
    Response::json(&DataReceipt {
        message: submission
            .message
            .unwrap_or_else(|| DATA_RECEIVED_MESSAGE.to_owned()),
        received_data: submission.data,
        timestamp: now(),
    })
}

/// The structured 404 body for anything the route table does not match.
pub(crate) fn not_found(path: &str) -> Response {
    Response::json_with_status(
        StatusCode::NOT_FOUND,
        &serde_json::json!({
            "error": "Route not found",
            "path": path,
        }),
    )
}
