//! Axum extractors for decoded cookies.
//!
//! Both extractors read the request extensions populated by the cookie
//! parser middleware and reject with `500` when it was not installed.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cookie::{Cookies, SignedCookies};

/// Rejection used when the cookie parser middleware did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Can't extract cookies. Is the cookie parser middleware applied?")]
pub struct CookiesMissing;

impl IntoResponse for CookiesMissing {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl<S> FromRequestParts<S> for Cookies
where
    S: Send + Sync,
{
    type Rejection = CookiesMissing;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Cookies>().cloned().ok_or(CookiesMissing)
    }
}

impl<S> FromRequestParts<S> for SignedCookies
where
    S: Send + Sync,
{
    type Rejection = CookiesMissing;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SignedCookies>()
            .cloned()
            .ok_or(CookiesMissing)
    }
}
