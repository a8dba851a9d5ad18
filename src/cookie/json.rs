//! JSON cookie inflation.
//!
//! Values prefixed with `j:` carry a JSON document. Anything else, including
//! valid JSON without the prefix, is left to the caller as a plain string.

use std::collections::HashMap;

use serde_json::Value;

/// Prefix marking a JSON-encoded cookie value.
pub const JSON_PREFIX: &str = "j:";

/// Decode a single cookie value.
///
/// Returns `None` ("not JSON") when the prefix is missing or the remainder is
/// not valid JSON; callers should keep the original string in that case.
pub fn json_cookie(value: &str) -> Option<Value> {
    let body = value.strip_prefix(JSON_PREFIX)?;
    serde_json::from_str(body).ok()
}

/// Decode a dynamically typed value. Only strings are candidates.
pub fn json_value(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => json_cookie(s),
        _ => None,
    }
}

/// Inflate every top-level string value of `cookies` that holds a JSON cookie.
///
/// Nested objects and arrays are not walked.
pub fn json_cookies(cookies: &mut HashMap<String, Value>) {
    for value in cookies.values_mut() {
        if let Some(decoded) = json_value(value) {
            *value = decoded;
        }
    }
}
