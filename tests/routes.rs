//! HTTP surface tests, driven through `Router::respond` — the full route
//! path minus the socket.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::BodyExt;
use kyu::routes::{self, AppState};
use kyu::{Error, Response, Router};
use serde_json::Value;

fn app() -> Router {
    routes::app(Arc::new(AppState::new()))
}

async fn call(router: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Bytes::from(body.to_owned()))
        .unwrap();

    let res = router.respond(req).await;
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn assert_rfc3339(value: &Value) {
    let raw = value.as_str().expect("timestamp should be a string");
    chrono::DateTime::parse_from_rfc3339(raw).expect("timestamp should be RFC 3339");
}

#[tokio::test]
async fn welcome_route() {
    let (status, body) = call(&app(), "GET", "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the server!");
    assert_eq!(body["status"], "running");
    assert_rfc3339(&body["timestamp"]);
}

#[tokio::test]
async fn health_reports_uptime() {
    let router = app();

    let (status, first) = call(&router, "GET", "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "healthy");
    assert_rfc3339(&first["timestamp"]);

    let first_uptime = first["uptime"].as_f64().unwrap();
    assert!(first_uptime >= 0.0);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let (_, second) = call(&router, "GET", "/health", "").await;
    assert!(second["uptime"].as_f64().unwrap() >= first_uptime);
}

#[tokio::test]
async fn timestamps_regenerate_per_call() {
    let router = app();
    let (_, first) = call(&router, "GET", "/", "").await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let (_, second) = call(&router, "GET", "/", "").await;
    assert_ne!(first["timestamp"], second["timestamp"]);
}

#[tokio::test]
async fn hello_echoes_the_name_parameter() {
    let (status, body) = call(&app(), "GET", "/api/hello?name=Ada", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from the API!");
    assert_eq!(body["data"]["user"], "Ada");
    assert_rfc3339(&body["data"]["timestamp"]);
}

#[tokio::test]
async fn hello_defaults_to_anonymous() {
    let (_, body) = call(&app(), "GET", "/api/hello", "").await;
    assert_eq!(body["data"]["user"], "Anonymous");
}

#[tokio::test]
async fn hello_preserves_an_explicit_empty_name() {
    // Present-but-empty is not absent: the default does not kick in.
    let (_, body) = call(&app(), "GET", "/api/hello?name=", "").await;
    assert_eq!(body["data"]["user"], "");
}

#[tokio::test]
async fn data_route_echoes_message_and_payload() {
    let (status, body) =
        call(&app(), "POST", "/api/data", r#"{"message":"hi","data":{"a":1}}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hi");
    assert_eq!(body["receivedData"]["a"], 1);
    assert_rfc3339(&body["timestamp"]);
}

#[tokio::test]
async fn data_route_defaults_on_empty_object() {
    let (status, body) = call(&app(), "POST", "/api/data", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Data received successfully");
    assert!(body.get("receivedData").is_none());
}

#[tokio::test]
async fn data_route_tolerates_a_malformed_body() {
    let (status, body) = call(&app(), "POST", "/api/data", "definitely not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Data received successfully");
    assert!(body.get("receivedData").is_none());
}

#[tokio::test]
async fn unmatched_path_is_a_structured_404() {
    let (status, body) = call(&app(), "GET", "/nonexistent", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["path"], "/nonexistent");
}

#[tokio::test]
async fn unmatched_method_is_a_structured_404() {
    // Routes are registered per method; POST / has no handler.
    let (status, body) = call(&app(), "POST", "/", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/");
}

#[tokio::test]
async fn handler_fault_becomes_a_structured_500() {
    let router = Router::new().get("/boom", |_req: kyu::Request| async {
        Err::<Response, _>(Error::Config("boom".to_owned()))
    });

    let (status, body) = call(&router, "GET", "/boom", "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Something went wrong!");
    assert_eq!(body["message"], "config: boom");
}
