//! Request middleware.

pub mod cookie_parser;

pub use cookie_parser::{cookie_parser_middleware, CookieParserLayer, CookieParserService};
