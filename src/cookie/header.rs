//! `Cookie` header tokenizer.
//!
//! # Responsibilities
//! - Split a raw `Cookie` header into `name -> value` pairs
//! - Strip optional double quotes around values
//! - Percent-decode values (configurable)
//!
//! # Design Decisions
//! - Permissive: malformed pairs are skipped, parsing never fails
//! - First occurrence of a name wins
//! - A value that fails to percent-decode is kept as-is

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// How cookie values are decoded after being split out of the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decode {
    /// Percent-decode values containing `%`.
    #[default]
    Percent,
    /// Keep values exactly as they appear on the wire.
    None,
}

/// Options forwarded to the header tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Value decoding strategy.
    pub decode: Decode,
}

impl ParseOptions {
    fn decode_value(&self, value: &str) -> String {
        match self.decode {
            Decode::Percent => percent_decode(value),
            Decode::None => value.to_string(),
        }
    }
}

/// Every `%` must start a two hex digit escape.
fn has_valid_escapes(value: &str) -> bool {
    value.split('%').skip(1).all(|rest| {
        rest.get(..2)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
    })
}

/// Percent decode, only allocating a decoded copy if `%` is present.
/// Values with a malformed escape, or that do not decode to valid UTF-8, are
/// returned unchanged.
fn percent_decode(value: &str) -> String {
    if !value.contains('%') || !has_valid_escapes(value) {
        return value.to_string();
    }
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

/// Parse a `Cookie` header into a mapping of cookie name to raw value.
pub fn parse_header(header: &str, options: &ParseOptions) -> HashMap<String, String> {
    let mut cookies = HashMap::with_capacity((header.matches(';').count() + 1).min(16));

    for pair in header.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };

        let name = name.trim();
        if name.is_empty() || cookies.contains_key(name) {
            continue;
        }

        let mut value = value.trim();
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        cookies.insert(name.to_string(), options.decode_value(value));
    }

    cookies
}
