//! # kyu
//!
//! A compact JSON API service and a rule-based integer classifier.
//!
//! The HTTP side exposes four fixed routes — a welcome banner, a health
//! check, a query echo, and a body echo — over hyper, with a radix-tree
//! router and a graceful-shutdown server lifecycle. Nothing is shared
//! between requests beyond the process start instant the health check reads.
//!
//! The classifier side ([`classify`]) is independent of the server: a pure
//! divisibility-rule engine (a parameterized FizzBuzz) with an optional
//! console adapter, shipped as the `drill` binary.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kyu::routes::{self, AppState};
//! use kyu::{Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kyu::Error> {
//!     let config = Config::from_env()?;
//!     let app = routes::app(Arc::new(AppState::new()));
//!     Server::new(&config)?.serve(app).await
//! }
//! ```
//!
//! Handlers are plain async functions:
//!
//! ```rust,no_run
//! use kyu::{Request, Response, Router};
//!
//! async fn pong(_req: Request) -> Response {
//!     Response::json(&serde_json::json!({ "pong": true }))
//! }
//!
//! let app = Router::new().get("/ping", pong);
//! ```

mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod classify;
pub mod routes;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
