//! Per-request cookie decoding pipeline.
//!
//! # Data Flow
//! ```text
//! Cookie header(s)
//!     → header.rs (tokenize, percent-decode)
//!     → json.rs (inflate `j:` values)
//!     → signed.rs (verify `s:` values, only when secrets are configured)
//!     → Cookies + SignedCookies attached to request extensions
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::{header::COOKIE, HeaderMap, Request};
use serde_json::Value;

use crate::config::CookieConfig;
use crate::cookie::header::{parse_header, ParseOptions};
use crate::cookie::jar::{Cookies, SignedCookies};
use crate::cookie::json::json_cookies;
use crate::cookie::signed::{signed_cookies, Secrets};
use crate::observability::metrics;

/// Cookie decoding configured once and shared by every request.
#[derive(Debug, Clone, Default)]
pub struct CookieParser {
    secrets: Secrets,
    options: ParseOptions,
}

impl CookieParser {
    /// Create a parser verifying signed cookies with `secrets`.
    pub fn new(secrets: impl Into<Secrets>) -> Self {
        Self {
            secrets: secrets.into(),
            options: ParseOptions::default(),
        }
    }

    /// Create a parser that does not verify signed cookies.
    pub fn unsigned() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CookieConfig) -> Self {
        Self {
            secrets: Secrets::new(config.secrets.iter().cloned()),
            options: config.parse.clone(),
        }
    }

    /// Override the options forwarded to the header tokenizer.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    /// Decode a raw `Cookie` header. An absent header yields empty mappings.
    pub fn decode(&self, header: Option<&str>) -> (Cookies, SignedCookies) {
        let mut cookies: HashMap<String, Value> = header
            .map(|h| parse_header(h, &self.options))
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();

        json_cookies(&mut cookies);

        let signed = if self.secrets.is_empty() {
            HashMap::new()
        } else {
            let signed = signed_cookies(&mut cookies, &self.secrets);
            for value in signed.values() {
                metrics::record_signed_cookie(value);
            }
            signed
        };

        (Cookies::new(cookies), SignedCookies::new(signed))
    }

    /// Decode every `Cookie` header of a request.
    ///
    /// Multiple header lines are joined with `"; "`. Bytes that are not valid
    /// UTF-8 become U+FFFD, so only the pair holding them is affected.
    pub fn parse(&self, headers: &HeaderMap) -> (Cookies, SignedCookies) {
        let values: Vec<Cow<'_, str>> = headers
            .get_all(COOKIE)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect();

        if values.is_empty() {
            self.decode(None)
        } else {
            self.decode(Some(&values.join("; ")))
        }
    }

    /// Attach `Cookies` and `SignedCookies` to the request.
    ///
    /// Returns `false` without touching the request when an earlier stage
    /// already attached `Cookies`.
    pub fn apply<B>(&self, req: &mut Request<B>) -> bool {
        if req.extensions().get::<Cookies>().is_some() {
            tracing::trace!("Cookies already parsed, skipping");
            return false;
        }

        let (cookies, signed) = self.parse(req.headers());
        tracing::debug!(
            cookies = cookies.len(),
            signed_cookies = signed.len(),
            "Parsed request cookies"
        );
        metrics::record_request();

        let extensions = req.extensions_mut();
        extensions.insert(cookies);
        extensions.insert(signed);
        true
    }
}
