//! Booking Errors

use tracing::error;

use haven_app::domain::bookings::BookingsServiceError;

use crate::envelope::Failure;

pub(crate) fn into_failure(error: BookingsServiceError, context: &str) -> Failure {
    error!("{context}: {error:?}");

    Failure::internal()
}
