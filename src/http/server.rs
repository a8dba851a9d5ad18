//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handlers
//! - Wire up middleware (tracing, timeout, cookie parser)
//! - Bind server to listener and serve until shutdown

use std::time::Duration;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::cookie::{CookieParser, Cookies, SignedCookies};
use crate::http::middleware::CookieParserLayer;
use crate::lifecycle::signals::wait_for_shutdown;

/// HTTP server echoing the decoded cookies of each request.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let parser = CookieParser::from_config(&config.cookies);
        if parser.secrets().is_empty() {
            tracing::info!("No cookie secrets configured, signed cookies will not be verified");
        }

        let router = Self::build_router(&config, parser);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, parser: CookieParser) -> Router {
        Router::new()
            .route("/", get(cookies_handler))
            .route("/signed", get(signed_cookies_handler))
            .layer(CookieParserLayer::new(parser))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for serving in-process (e.g. with `tower::ServiceExt::oneshot`).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn cookies_handler(cookies: Cookies) -> Json<Value> {
    Json(json!({ "cookies": cookies }))
}

async fn signed_cookies_handler(signed: SignedCookies) -> Json<Value> {
    Json(json!({ "cookies": signed }))
}
