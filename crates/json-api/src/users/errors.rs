//! User Errors

use tracing::error;

use haven_app::domain::users::UsersServiceError;

use crate::{auth::USER_NOT_FOUND, envelope::Failure};

pub(crate) fn into_failure(error: UsersServiceError, context: &str) -> Failure {
    match error {
        UsersServiceError::NotFound => Failure::not_found(USER_NOT_FOUND),
        other => {
            error!("{context}: {other:?}");

            Failure::internal()
        }
    }
}
