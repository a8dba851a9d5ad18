//! Cookie parsing middleware.
//!
//! Decodes the `Cookie` header of incoming requests into two mappings
//! attached to the request extensions:
//! - [`Cookies`]: plain cookies, with `j:` values inflated to JSON
//! - [`SignedCookies`]: `s:` values verified against a rotating set of secrets
//!
//! ```text
//! Cookie header → tokenize → JSON decode → signature decode → extensions → handler
//! ```
//!
//! The decoding utilities in [`cookie`] are pure functions and can be used
//! without any HTTP stack.

pub mod config;
pub mod cookie;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use cookie::{CookieParser, Cookies, Secrets, SignedCookies, SignedValue};
pub use http::{cookie_parser_middleware, CookieParserLayer, HttpServer};
pub use lifecycle::Shutdown;
