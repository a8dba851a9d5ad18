//! Signed cookie verification.
//!
//! # Format
//! ```text
//! s:<payload>.<signature>
//! ```
//! `signature` is HMAC-SHA256 of `payload` keyed by a secret, base64-encoded
//! (standard alphabet) with the trailing `=` padding stripped. The payload may
//! contain dots: the signature starts after the last one.
//!
//! # Design Decisions
//! - Secrets are tried in order, first match wins (supports key rotation)
//! - Signatures are compared in constant time
//! - Verification failure is a value (`SignedValue::Rejected`), never an error

use std::collections::HashMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::{Serialize, Serializer};
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Prefix marking a signed cookie value.
pub const SIGNED_PREFIX: &str = "s:";

type HmacSha256 = Hmac<Sha256>;

/// Ordered, immutable set of secrets used to verify signed cookies.
///
/// Put the newest secret first when rotating keys.
#[derive(Clone, Default)]
pub struct Secrets(Arc<[String]>);

impl Secrets {
    /// Create a secret set from an ordered list of secrets.
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(secrets.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// Never print secret material.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets").field("count", &self.0.len()).finish()
    }
}

impl From<&str> for Secrets {
    fn from(secret: &str) -> Self {
        Self::new([secret])
    }
}

impl From<String> for Secrets {
    fn from(secret: String) -> Self {
        Self::new([secret])
    }
}

impl From<Vec<String>> for Secrets {
    fn from(secrets: Vec<String>) -> Self {
        Self::new(secrets)
    }
}

impl From<&[&str]> for Secrets {
    fn from(secrets: &[&str]) -> Self {
        Self::new(secrets.iter().copied())
    }
}

/// Outcome of decoding a value that carried the signed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedValue {
    /// The signature matched one of the secrets; holds the payload.
    Verified(String),
    /// No secret produced a matching signature (tampered or unknown key).
    Rejected,
}

impl SignedValue {
    /// The verified payload, if any.
    pub fn verified(&self) -> Option<&str> {
        match self {
            SignedValue::Verified(payload) => Some(payload),
            SignedValue::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SignedValue::Rejected)
    }
}

/// Serializes as the payload string, or `false` when rejected.
impl Serialize for SignedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SignedValue::Verified(payload) => serializer.serialize_str(payload),
            SignedValue::Rejected => serializer.serialize_bool(false),
        }
    }
}

fn signature(payload: &str, secret: &str) -> String {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    STANDARD_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Sign `payload` with `secret`, producing `payload.signature`.
///
/// Prepend [`SIGNED_PREFIX`] to obtain a cookie value.
pub fn sign(payload: &str, secret: &str) -> String {
    format!("{}.{}", payload, signature(payload, secret))
}

/// Verify `payload.signature` against a single secret.
pub fn unsign(input: &str, secret: &str) -> Option<String> {
    let (payload, _) = input.rsplit_once('.')?;
    let expected = sign(payload, secret);

    if bool::from(expected.as_bytes().ct_eq(input.as_bytes())) {
        Some(payload.to_string())
    } else {
        None
    }
}

/// Decode a single cookie value.
///
/// Returns `None` when the value is not a signed cookie; callers keep the
/// original string. An empty secret set rejects every signed value.
pub fn signed_cookie(value: &str, secrets: &Secrets) -> Option<SignedValue> {
    let signed = value.strip_prefix(SIGNED_PREFIX)?;

    let verified = secrets.iter().find_map(|secret| unsign(signed, secret));
    Some(match verified {
        Some(payload) => SignedValue::Verified(payload),
        None => SignedValue::Rejected,
    })
}

/// Move every signed entry of `cookies` into the returned mapping.
///
/// Rejected entries are moved too, as [`SignedValue::Rejected`]. Unsigned
/// strings and non-string values stay in `cookies`.
pub fn signed_cookies(
    cookies: &mut HashMap<String, Value>,
    secrets: &Secrets,
) -> HashMap<String, SignedValue> {
    let mut signed = HashMap::new();

    cookies.retain(|name, value| {
        let Value::String(raw) = value else {
            return true;
        };
        match signed_cookie(raw, secrets) {
            Some(decoded) => {
                if decoded.is_rejected() {
                    tracing::warn!(cookie = %name, "Signed cookie failed verification");
                }
                signed.insert(name.clone(), decoded);
                false
            }
            None => true,
        }
    });

    signed
}
