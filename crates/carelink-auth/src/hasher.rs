//! Argon2id hashing behind a small wrapper.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use carelink_core::errors::{CareError, CareResult};

/// Hashes and verifies passwords using Argon2id with default parameters.
#[derive(Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password into a PHC-format string with a fresh random salt.
    pub fn hash(&self, password: &str) -> CareResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CareError::CredentialHash {
                reason: e.to_string(),
            })?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC-format hash.
    pub fn verify(&self, password: &str, stored_hash: &str) -> CareResult<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| CareError::CredentialHash {
            reason: format!("stored hash unparseable: {e}"),
        })?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CareError::CredentialHash {
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("s3cret").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("s3cret", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_different_salts() {
        let hasher = CredentialHasher::new();
        let a = hasher.hash("s3cret").unwrap();
        let b = hasher.hash("s3cret").unwrap();
        assert_ne!(a, b, "each hash must use a fresh salt");
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        let hasher = CredentialHasher::new();
        assert!(hasher.verify("s3cret", "not-a-phc-string").is_err());
    }
}
