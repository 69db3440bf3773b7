use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use super::error::UserError;

/// One-way credential hashing
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext credential into an opaque, salted digest
    fn hash(&self, plaintext: &str) -> Result<String, UserError>;

    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// Argon2id with default parameters and a random salt per hash.
/// Digests are PHC strings (`$argon2id$v=19$...`).
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Invalid hash format: {}", e);
                false
            }
        }
    }
}
