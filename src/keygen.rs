use rand::RngCore;

/// Generates a random 256-bit secret suitable for any HS algorithm.
///
/// The raw bytes are base64url-encoded so the secret can travel through
/// configuration as text; the encoded form is what gets used as key
/// material.
pub fn random_secret() -> Vec<u8> {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use rand::rng;

    let mut secret = [0u8; 32];
    rng().fill_bytes(&mut secret);
    URL_SAFE_NO_PAD.encode(secret).into_bytes()
}
