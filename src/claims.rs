//! The claim set carried in a token payload.
//!
//! Reserved claims (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`) are
//! typed fields; everything else rides in the `extra` map. Values are
//! restricted to the closed [`ClaimValue`] set, so a payload carrying JSON
//! nulls, nested objects, or mixed arrays fails to parse and the token
//! verifies as invalid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single claim value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(serde_json::Number),
    /// Boolean flag.
    Bool(bool),
    /// Ordered sequence of text values.
    TextSeq(Vec<String>),
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::Text(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::Text(value)
    }
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Number(value.into())
    }
}

impl From<u64> for ClaimValue {
    fn from(value: u64) -> Self {
        ClaimValue::Number(value.into())
    }
}

impl From<Vec<String>> for ClaimValue {
    fn from(value: Vec<String>) -> Self {
        ClaimValue::TextSeq(value)
    }
}

impl From<Vec<&str>> for ClaimValue {
    fn from(value: Vec<&str>) -> Self {
        ClaimValue::TextSeq(value.into_iter().map(str::to_string).collect())
    }
}

/// Claims asserted by a token.
///
/// Every field is optional. `exp` only gains meaning at verification time,
/// where its absence skips the expiration check entirely. The extension map
/// is a `BTreeMap` so serialization order is stable and encoding stays
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (`iss`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject (`sub`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Audience (`aud`), a single value or a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<ClaimValue>,
    /// Expiration time (`exp`), UNIX seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not-before time (`nbf`), UNIX seconds. Carried, not enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Issued-at time (`iat`), UNIX seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Token identifier (`jti`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Any additional claims.
    #[serde(flatten)]
    pub extra: BTreeMap<String, ClaimValue>,
}

impl Claims {
    /// Creates an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the issuer (`iss`) claim.
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Sets the subject (`sub`) claim.
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Sets the audience (`aud`) claim.
    pub fn audience(mut self, aud: impl Into<ClaimValue>) -> Self {
        self.aud = Some(aud.into());
        self
    }

    /// Sets the expiration (`exp`) claim, in UNIX seconds.
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Sets the not-before (`nbf`) claim, in UNIX seconds.
    pub fn not_before(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    /// Sets the issued-at (`iat`) claim, in UNIX seconds.
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Sets the token identifier (`jti`) claim.
    pub fn token_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Adds a custom claim.
    pub fn claim(mut self, key: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
