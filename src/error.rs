//! Error types for token encoding and verification.
//!
//! Only hard failures live here. Malformed, tampered, or expired tokens are
//! not errors: verification classifies them through
//! [`Verification`](crate::Verification) instead, so untrusted input can
//! never surface as an `Err` to the caller.

use thiserror::Error;

/// Hard failures raised while producing a token or recomputing a signature.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The claims object could not be serialized as JSON.
    #[error("claims could not be serialized as JSON")]
    Serialization(#[from] serde_json::Error),

    /// The HMAC primitive rejected the supplied key material.
    #[error("HMAC key material was rejected")]
    Signing,
}
