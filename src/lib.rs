//! Compact HMAC-signed tokens (JWT-style) with typed claims.
//!
//! This crate implements the three-segment `header.payload.signature` token
//! format for the symmetric HS family (HS256, HS384, HS512): base64url
//! segments, JSON header and payload, and an HMAC signature computed over the
//! exact wire bytes. [`encode`] and [`verify`] are pure functions over a
//! [`Claims`] object and a shared secret; the crate keeps no state between
//! calls, so independent calls are safe to run concurrently.
//!
//! # Examples
//!
//! ```rust
//! use hstoken::{encode, verify, Algorithm, Claims, Verification};
//!
//! fn main() -> Result<(), hstoken::TokenError> {
//!     let claims = Claims::new()
//!         .subject("1234567890")
//!         .claim("name", "John Doe")
//!         .expires_at(32503680000); // year 3000
//!
//!     let token = encode(&claims, b"shared-secret", Algorithm::HS256)?;
//!
//!     match verify(&token, b"shared-secret", Algorithm::HS256, 0)? {
//!         Verification::Valid(claims) => println!("hello {:?}", claims.sub),
//!         Verification::Expired => println!("please re-authenticate"),
//!         Verification::Invalid => println!("token rejected"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A service issuing and checking tokens maps the outcome the obvious way:
//! `Valid` hands the decoded claims to the request, while `Expired` and
//! `Invalid` both become an authentication failure (HTTP 401 or similar).
//! The two rejections stay distinct so the expired case can prompt a fresh
//! login rather than a flat refusal.
//!
//! [`verify`] reads the system clock to judge expiration; [`verify_at`] takes
//! the timestamp as an argument instead, which is the form tests should use.
//!
//! Identical `(claims, secret, algorithm)` inputs always produce an
//! identical token. Callers that need request-unique tokens put a unique
//! claim such as `jti` in the payload.

mod algorithm;
mod claims;
mod compat;
mod error;
#[cfg(feature = "key-gen")]
mod keygen;

pub use algorithm::Algorithm;
pub use claims::{ClaimValue, Claims};
pub use compat::*;
pub use error::TokenError;
#[cfg(feature = "key-gen")]
pub use keygen::random_secret;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Token header, fixed to `{alg, typ: "JWT"}`.
///
/// Built fresh on every encode and never parsed back: verification compares
/// the opaque header segment, not a re-serialized form.
#[derive(Debug, Serialize)]
struct Header {
    alg: Algorithm,
    typ: &'static str,
}

/// The outcome of verifying a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// Signature and expiration check out; carries the decoded claims.
    Valid(Claims),
    /// Malformed structure, undecodable payload, or signature mismatch.
    Invalid,
    /// Structurally sound but past its `exp` plus any leeway.
    Expired,
}

impl Verification {
    /// Returns `true` only for [`Verification::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid(_))
    }

    /// The decoded claims, if the token verified.
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Verification::Valid(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Encodes `claims` into a signed token.
///
/// Serializes the `{alg, typ}` header and the claims to JSON, base64url
/// encodes both, and signs `header + "." + payload` with `secret`.
///
/// # Errors
///
/// [`TokenError::Serialization`] if the claims cannot be serialized as JSON,
/// [`TokenError::Signing`] if the HMAC primitive rejects the key material.
/// Producing a bad token silently is never an option, so both propagate.
pub fn encode(claims: &Claims, secret: &[u8], algorithm: Algorithm) -> Result<String, TokenError> {
    let header = Header {
        alg: algorithm,
        typ: "JWT",
    };
    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
    let claims_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);

    let signing_input = format!("{header_b64}.{claims_b64}");
    let signature = algorithm.sign(secret, signing_input.as_bytes())?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature);

    debug!(alg = algorithm.name(), "token issued");
    Ok(format!("{signing_input}.{signature_b64}"))
}

/// Verifies `token` against the system clock.
///
/// Convenience over [`verify_at`] with `now` taken from the wall clock in
/// UNIX seconds. `leeway` widens the expiration check by that many seconds
/// to absorb clock skew between issuer and verifier.
pub fn verify(
    token: &str,
    secret: &[u8],
    algorithm: Algorithm,
    leeway: u64,
) -> Result<Verification, TokenError> {
    verify_at(token, secret, algorithm, leeway, Utc::now().timestamp())
}

/// Verifies `token` with `now` supplied by the caller (UNIX seconds).
///
/// Checks run cheapest-first: segment structure, then payload decode, then
/// expiration, and only then the signature recomputation, so malformed or
/// stale tokens short-circuit before any cryptography. The HMAC is computed
/// over the header and payload segments exactly as they appear in the token,
/// never over a re-serialized form, so the original wire bytes reproduce bit
/// for bit.
///
/// Untrusted input is never an `Err`: bad structure, undecodable payload,
/// and signature mismatch all classify as [`Verification::Invalid`], and a
/// token whose `exp` plus `leeway` is behind `now` classifies as
/// [`Verification::Expired`]. `Err` is reserved for the signing primitive
/// itself failing.
pub fn verify_at(
    token: &str,
    secret: &[u8],
    algorithm: Algorithm,
    leeway: u64,
    now: i64,
) -> Result<Verification, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        debug!(segments = parts.len(), "token structure rejected");
        return Ok(Verification::Invalid);
    }

    let payload = match URL_SAFE_NO_PAD.decode(parts[1]) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(Verification::Invalid),
    };
    let claims: Claims = match serde_json::from_slice(&payload) {
        Ok(claims) => claims,
        Err(_) => return Ok(Verification::Invalid),
    };

    if let Some(exp) = claims.exp {
        let leeway = i64::try_from(leeway).unwrap_or(i64::MAX);
        if exp.saturating_add(leeway) < now {
            debug!("token expired");
            return Ok(Verification::Expired);
        }
    }

    let signing_input = format!("{}.{}", parts[0], parts[1]);
    let expected = algorithm.sign(secret, signing_input.as_bytes())?;
    let expected_b64 = URL_SAFE_NO_PAD.encode(expected);

    if bool::from(expected_b64.as_bytes().ct_eq(parts[2].as_bytes())) {
        Ok(Verification::Valid(claims))
    } else {
        debug!("signature mismatch");
        Ok(Verification::Invalid)
    }
}
