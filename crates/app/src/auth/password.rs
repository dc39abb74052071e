//! Password hashing and verification.

use std::fmt;

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;
use zeroize::Zeroize;

/// A plaintext password as received from a client.
///
/// The buffer is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(plaintext.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] HashError),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] HashError),
}

/// Hash with Argon2id and a freshly generated salt, returning the PHC string.
pub fn hash_password(password: &Password) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check a candidate password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &Password, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(source) => Err(PasswordError::MalformedHash(source)),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_is_not_the_plaintext_and_verifies() -> TestResult {
        let password = Password::new("pw");
        let hash = hash_password(&password)?;

        assert_ne!(hash, "pw");
        assert!(hash.starts_with("$argon2"), "expected a PHC string");
        assert!(verify_password(&password, &hash)?);

        Ok(())
    }

    #[test]
    fn same_password_hashes_differently_each_time() -> TestResult {
        let password = Password::new("pw");

        assert_ne!(hash_password(&password)?, hash_password(&password)?);

        Ok(())
    }

    #[test]
    fn wrong_password_does_not_verify() -> TestResult {
        let hash = hash_password(&Password::new("right"))?;

        assert!(!verify_password(&Password::new("wrong"), &hash)?);

        Ok(())
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let result = verify_password(&Password::new("pw"), "not-a-phc-string");

        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn debug_output_is_redacted() {
        assert_eq!(
            format!("{:?}", Password::new("hunter2")),
            "Password(**redacted**)"
        );
    }
}
