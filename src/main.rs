//! Server binary: the four JSON routes over hyper.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/health
//!   curl http://localhost:3000/api/hello?name=Ada
//!   curl -X POST http://localhost:3000/api/data \
//!        -H 'content-type: application/json' \
//!        -d '{"message":"hi","data":{"a":1}}'
//!
//! `PORT` selects the listening port (default 3000).

use std::sync::Arc;

use kyu::routes::{self, AppState};
use kyu::{Config, Server};

#[tokio::main]
async fn main() -> Result<(), kyu::Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let app = routes::app(Arc::new(AppState::new()));

    Server::new(&config)?.serve(app).await
}
