//! Password Hash Value Object
//!
//! Argon2id hashes in PHC string format. Plain-text passwords never leave the
//! create path: they are hashed before the user reaches a repository.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::shared::errors::DomainError;

/// Hashed password as stored in the `users.password` column
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

impl PasswordHash {
    /// Hash a plain-text password with a fresh random salt.
    ///
    /// This is CPU-bound; async callers should run it on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PasswordHash` if Argon2 rejects the input.
    pub fn hash(plain_text: &str) -> Result<Self, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap a hash loaded from storage
    #[must_use]
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    /// Check a plain-text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    #[must_use]
    pub fn verify(&self, plain_text: &str) -> bool {
        argon2::PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
