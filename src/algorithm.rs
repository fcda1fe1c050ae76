//! HMAC algorithm selection for token signing and verification.
//!
//! The three HS-family algorithms differ only in digest width. Keeping them
//! in a closed enum matched exhaustively means an unsupported algorithm name
//! can never reach the signer.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::{Sha256, Sha384, Sha512};

use crate::TokenError;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported HMAC signing algorithms.
///
/// Serializes to the name carried in the token header (`"HS256"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    /// HMAC-SHA256, 32-byte digest.
    HS256,
    /// HMAC-SHA384, 48-byte digest.
    HS384,
    /// HMAC-SHA512, 64-byte digest.
    HS512,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HS256
    }
}

impl Algorithm {
    /// Returns the algorithm name as it appears in the token header.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }

    /// Signs `message` with `secret` as raw key material, returning the digest.
    ///
    /// No minimum key length is imposed; HMAC accepts short keys.
    pub fn sign(&self, secret: &[u8], message: &[u8]) -> Result<Vec<u8>, TokenError> {
        match self {
            Algorithm::HS256 => {
                let mut mac =
                    HmacSha256::new_from_slice(secret).map_err(|_| TokenError::Signing)?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS384 => {
                let mut mac =
                    HmacSha384::new_from_slice(secret).map_err(|_| TokenError::Signing)?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS512 => {
                let mut mac =
                    HmacSha512::new_from_slice(secret).map_err(|_| TokenError::Signing)?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_header_serialization() {
        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let serialized = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(serialized, format!("\"{}\"", algorithm.name()));
        }
    }

    #[test]
    fn test_digest_lengths() {
        let secret = b"test-secret";
        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let digest = algorithm.sign(secret, b"message").unwrap();
            assert_eq!(digest.len(), algorithm.digest_len());
        }
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = Algorithm::HS256.sign(b"key", b"message").unwrap();
        let b = Algorithm::HS256.sign(b"key", b"message").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_keys_accepted() {
        // HMAC pads short keys internally, so even a one-byte secret signs.
        assert!(Algorithm::HS256.sign(b"k", b"message").is_ok());
        assert!(Algorithm::HS256.sign(b"", b"message").is_ok());
    }

    // RFC 4231 test case 2.
    #[test]
    fn test_rfc4231_vectors() {
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";

        let expected_256 =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(Algorithm::HS256.sign(key, data).unwrap(), expected_256);

        let expected_384 = hex::decode(
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
             8e2240ca5e69e2c78b3239ecfab21649",
        )
        .unwrap();
        assert_eq!(Algorithm::HS384.sign(key, data).unwrap(), expected_384);

        let expected_512 = hex::decode(
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        )
        .unwrap();
        assert_eq!(Algorithm::HS512.sign(key, data).unwrap(), expected_512);
    }
}
