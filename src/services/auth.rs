//! Password hashing and opaque session-token generation.

use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use sha2::{Digest, Sha256};

/// Hash a password with Argon2id (salted). This is the representation written
/// at user creation. The login path compares against [`sha256_hex`] instead,
/// so the two never line up for the same password.
///
/// Note: Argon2 is CPU-intensive; call through `spawn_blocking` from async
/// contexts.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Unsalted SHA-256 hex digest, as consumed by the login lookup.
#[must_use]
pub fn sha256_hex(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());

    digest.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}

/// Generate an opaque session token: 48 random bytes, URL-safe base64.
///
/// The token is returned to the client but never persisted, so nothing in
/// this system can verify it later.
#[must_use]
pub fn generate_session_token() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; 48] = rng.random();

    URL_SAFE.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_matches_known_vector() {
        assert_eq!(
            sha256_hex("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn argon2_hash_differs_from_plaintext() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn argon2_and_sha256_never_agree() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, sha256_hex("hunter2"));
    }

    #[test]
    fn session_token_is_64_url_safe_chars() {
        let token = generate_session_token();
        // 48 bytes encode to exactly 64 base64 characters, no padding.
        assert_eq!(token.len(), 64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn session_tokens_are_random() {
        assert_ne!(generate_session_token(), generate_session_token());
    }
}
