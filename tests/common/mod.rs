//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header::COOKIE, Request},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use cookie_parser::config::AppConfig;
use cookie_parser::{HttpServer, Shutdown};

/// Build a config verifying signed cookies with `secrets`.
pub fn config_with_secrets(secrets: &[&str]) -> AppConfig {
    let mut config = AppConfig::default();
    config.cookies.secrets = secrets.iter().map(|s| s.to_string()).collect();
    config
}

/// Send a GET through `router` and return the JSON body.
#[allow(dead_code)]
pub async fn get_json(router: Router, path: &str, cookie: Option<&str>) -> (u16, Value) {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let req = builder.body(Body::empty()).unwrap();

    let res = router.oneshot(req).await.unwrap();
    let status = res.status().as_u16();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Start the echo server on an ephemeral port.
///
/// The returned `Shutdown` stops the server when triggered.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
