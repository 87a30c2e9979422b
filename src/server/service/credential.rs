//! Password hashing with argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hashes and verifies passwords using argon2 with default parameters.
#[derive(Clone, Default)]
pub struct CredentialService;

impl CredentialService {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-formatted hash string
    /// - `Err(password_hash::Error)` - Hashing failed
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);

        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// Checks a password against a stored hash.
    ///
    /// A stored value that is not a valid PHC hash never verifies.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
