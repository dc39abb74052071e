//! Auth Errors

use haven_app::auth::AuthServiceError;
use tracing::error;

use crate::envelope::Failure;

pub(crate) const USER_NOT_FOUND: &str = "User not found";
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Map a credential service error onto its envelope. `context` is only logged.
pub(crate) fn into_failure(error: AuthServiceError, context: &str) -> Failure {
    match error {
        AuthServiceError::AlreadyExists => Failure::conflict("User already exists"),
        AuthServiceError::NotFound => Failure::not_found(USER_NOT_FOUND),
        AuthServiceError::InvalidCredentials => Failure::bad_request("Invalid email or password"),
        AuthServiceError::Unauthorized => Failure::unauthorized(INVALID_TOKEN),
        AuthServiceError::Forbidden => Failure::forbidden("Not allowed to reset this password"),
        AuthServiceError::Password(source) => {
            error!("{context}: {source}");

            Failure::internal()
        }
        AuthServiceError::Token(source) => {
            error!("{context}: {source}");

            Failure::internal()
        }
        AuthServiceError::Users(source) => {
            error!("{context}: {source:?}");

            Failure::internal()
        }
    }
}
