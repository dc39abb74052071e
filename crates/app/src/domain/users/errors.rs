//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// User service error variants.
#[derive(Debug, Error)]
pub enum UsersServiceError {
    /// A user with the same email already exists.
    #[error("user already exists")]
    AlreadyExists,

    /// User was not found.
    #[error("user not found")]
    NotFound,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // The unique email index is the only constraint input can trip.
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
