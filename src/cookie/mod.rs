//! Cookie decoding subsystem.
//!
//! # Data Flow
//! ```text
//! raw `Cookie` header
//!     → header.rs (name → raw value)
//!     → json.rs (`j:` values inflated to JSON)
//!     → signed.rs (`s:` values verified and moved out)
//!     → jar.rs (Cookies, SignedCookies)
//! ```
//!
//! # Design Decisions
//! - Decoding never fails; outcomes are values (`Option`, `SignedValue`)
//! - A cookie name lands in at most one of `Cookies` / `SignedCookies`
//! - Secrets are fixed when the parser is built and shared read-only

pub mod header;
pub mod jar;
pub mod json;
pub mod parser;
pub mod signed;

pub use header::{parse_header, Decode, ParseOptions};
pub use jar::{Cookies, SignedCookies};
pub use json::{json_cookie, json_cookies, json_value, JSON_PREFIX};
pub use parser::CookieParser;
pub use signed::{sign, signed_cookie, signed_cookies, unsign, Secrets, SignedValue, SIGNED_PREFIX};
