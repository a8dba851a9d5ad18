//! HTTP integration of the cookie parser.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → middleware/ (CookieParserLayer attaches Cookies + SignedCookies)
//!     → extract.rs (handlers pull the decoded mappings)
//! ```

pub mod extract;
pub mod middleware;
pub mod server;

pub use extract::CookiesMissing;
pub use middleware::{cookie_parser_middleware, CookieParserLayer, CookieParserService};
pub use server::HttpServer;
