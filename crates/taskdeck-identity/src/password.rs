//! Password hashing with Argon2id and bearer token minting.

use crate::errors::{IdentityError, Result};
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::RngCore;

/// Generate a random salt for password hashing
pub fn generate_salt() -> SaltString {
    SaltString::generate(&mut rand::thread_rng())
}

/// Hash a password using Argon2id
///
/// Returns a PHC-formatted hash string that includes algorithm,
/// parameters, salt, and hash.
pub fn hash_password(password: &str, salt: &SaltString) -> Result<String> {
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), salt)
        .map_err(|e| IdentityError::Hash(e.to_string()))?;

    Ok(password_hash.to_string())
}

/// Verify a password against an Argon2id PHC hash string
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch; errors only on a
/// malformed stored hash.
pub fn verify_password(password: &str, hash_str: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash_str).map_err(|e| IdentityError::Hash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Mint an opaque bearer token (32 random bytes, hex-encoded)
pub fn mint_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let salt = generate_salt();
        let hash = hash_password("correct horse battery staple", &salt).unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_salts_produce_distinct_hashes() {
        let hash1 = hash_password("hunter2", &generate_salt()).unwrap();
        let hash2 = hash_password("hunter2", &generate_salt()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_never_contains_password() {
        let hash = hash_password("plaintext-secret", &generate_salt()).unwrap();
        assert!(!hash.contains("plaintext-secret"));
    }

    #[test]
    fn test_mint_token_is_random_hex() {
        let token1 = mint_token();
        let token2 = mint_token();

        assert_eq!(token1.len(), 64);
        assert_ne!(token1, token2);
        assert!(token1.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
