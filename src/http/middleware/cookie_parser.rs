//! Cookie parsing middleware.
//!
//! Two equivalent ways to install [`CookieParser`] in front of handlers:
//! - [`CookieParserLayer`], a tower layer usable with any `http::Request<B>` service
//! - [`cookie_parser_middleware`], for `axum::middleware::from_fn_with_state`
//!
//! Both attach [`Cookies`](crate::cookie::Cookies) and
//! [`SignedCookies`](crate::cookie::SignedCookies) to the request extensions and
//! call the next stage exactly once. Parsing cannot fail, so neither ever
//! short-circuits the pipeline.

use std::task::{Context, Poll};

use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};
use tower::{Layer, Service};

use crate::cookie::CookieParser;

/// Tower layer wrapping services with [`CookieParserService`].
#[derive(Debug, Clone)]
pub struct CookieParserLayer {
    parser: CookieParser,
}

impl CookieParserLayer {
    pub fn new(parser: CookieParser) -> Self {
        Self { parser }
    }
}

impl<S> Layer<S> for CookieParserLayer {
    type Service = CookieParserService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CookieParserService {
            inner,
            parser: self.parser.clone(),
        }
    }
}

/// Service decoding request cookies before forwarding to `inner`.
#[derive(Debug, Clone)]
pub struct CookieParserService<S> {
    inner: S,
    parser: CookieParser,
}

impl<S, B> Service<http::Request<B>> for CookieParserService<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        self.parser.apply(&mut req);
        self.inner.call(req)
    }
}

/// Middleware function for `axum::middleware::from_fn_with_state`.
pub async fn cookie_parser_middleware(
    State(parser): State<CookieParser>,
    mut req: Request,
    next: Next,
) -> Response {
    parser.apply(&mut req);
    next.run(req).await
}
