//! Bookings service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    /// Booking references are opaque strings, so only storage can fail.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_stays_a_storage_error() {
        assert!(matches!(
            BookingsServiceError::from(sqlx::Error::RowNotFound),
            BookingsServiceError::Sql(sqlx::Error::RowNotFound)
        ));
    }
}
