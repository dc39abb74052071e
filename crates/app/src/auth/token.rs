//! Bearer token issuance and verification.

use std::fmt;

use jiff::Timestamp;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::records::UserUuid;

/// Tokens are valid for one day unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User the token was issued to.
    pub sub: Uuid,

    /// Issued at, seconds since the epoch.
    pub iat: i64,

    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing key must not be empty")]
    EmptySecret,

    #[error("failed to sign token")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token is invalid or expired")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies HS256 bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenIssuer {
    /// Build an issuer from the signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::EmptySecret`] when the secret is empty.
    pub fn new(secret: &[u8], ttl_seconds: i64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);

        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds,
        })
    }

    /// Issue a token for the given user, valid from now for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if the claims cannot be signed.
    pub fn issue(&self, user: UserUuid) -> Result<String, TokenError> {
        let now = Timestamp::now().as_second();

        let claims = Claims {
            sub: user.into_uuid(),
            iat: now,
            exp: now.saturating_add(self.ttl_seconds),
        };

        self.sign(&claims)
    }

    /// Verify signature and expiry, returning the user the token was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for a malformed, tampered or expired token.
    pub fn verify(&self, token: &str) -> Result<UserUuid, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(TokenError::Invalid)?;

        Ok(UserUuid::from_uuid(data.claims.sub))
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Encode)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("keys", &"**redacted**")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
