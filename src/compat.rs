//! First-generation API kept for callers that predate algorithm selection.
//!
//! The original surface was HS512-only, applied no leeway, and collapsed
//! every failure into `false`. New code should use [`encode`](crate::encode)
//! and [`verify`](crate::verify) directly.

use crate::{encode, verify, Algorithm, Claims, TokenError, Verification};

/// Encodes `claims` with HS512.
#[deprecated(note = "use `encode` with `Algorithm::HS512`")]
pub fn encode_hs512(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    encode(claims, secret, Algorithm::HS512)
}

/// Verifies an HS512 token, collapsing `Invalid` and `Expired` into `false`.
#[deprecated(note = "use `verify`, which distinguishes invalid from expired")]
pub fn verify_hs512(token: &str, secret: &[u8]) -> Result<bool, TokenError> {
    let outcome = verify(token, secret, Algorithm::HS512, 0)?;
    Ok(matches!(outcome, Verification::Valid(_)))
}
