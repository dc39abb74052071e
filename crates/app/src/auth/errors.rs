//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::{PasswordError, TokenError},
    domain::users::UsersServiceError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("bearer token missing, invalid or expired")]
    Unauthorized,

    #[error("caller does not own this account")]
    Forbidden,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("token processing error")]
    Token(#[source] TokenError),

    #[error("user storage error")]
    Users(#[source] UsersServiceError),
}

impl From<UsersServiceError> for AuthServiceError {
    fn from(error: UsersServiceError) -> Self {
        match error {
            UsersServiceError::AlreadyExists => Self::AlreadyExists,
            UsersServiceError::NotFound => Self::NotFound,
            other => Self::Users(other),
        }
    }
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        Self::Token(error)
    }
}
