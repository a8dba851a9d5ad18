//! Decoded cookie mappings attached to each request.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::cookie::signed::SignedValue;

/// Plain cookies: raw strings, or JSON values for inflated `j:` cookies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cookies(HashMap<String, Value>);

impl Cookies {
    pub fn new(cookies: HashMap<String, Value>) -> Self {
        Self(cookies)
    }

    /// Get a cookie by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Get a cookie by name if its value is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

/// Cookies that carried the signed prefix, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignedCookies(HashMap<String, SignedValue>);

impl SignedCookies {
    pub fn new(cookies: HashMap<String, SignedValue>) -> Self {
        Self(cookies)
    }

    /// Get the decoding outcome for a signed cookie.
    pub fn get(&self, name: &str) -> Option<&SignedValue> {
        self.0.get(name)
    }

    /// Get the payload of a signed cookie that passed verification.
    pub fn verified(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(SignedValue::verified)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SignedValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> HashMap<String, SignedValue> {
        self.0
    }
}
