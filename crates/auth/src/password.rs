//! Password hashing and verification
//!
//! Passwords are stored only as salted bcrypt hashes.

use vagas_common::{Error, Result};

/// Hash a plaintext password with bcrypt (default cost).
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST)
        .map_err(|e| Error::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash)
        .map_err(|e| Error::Internal(format!("Password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3nh4-secreta").unwrap();

        // Hash is salted, never the plaintext
        assert_ne!(hash, "s3nh4-secreta");
        assert!(verify_password("s3nh4-secreta", &hash).unwrap());
        assert!(!verify_password("senha-errada", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("mesma-senha").unwrap();
        let b = hash_password("mesma-senha").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_malformed_hash_is_error() {
        assert!(verify_password("qualquer", "not-a-bcrypt-hash").is_err());
    }
}
