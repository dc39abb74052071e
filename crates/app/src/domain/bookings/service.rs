//! Bookings service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::bookings::{
    data::NewBooking, errors::BookingsServiceError, records::BookingRecord,
    repository::PgBookingsRepository,
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    repository: PgBookingsRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgBookingsRepository::new(pool),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.repository
            .create_booking(booking)
            .await
            .map_err(Into::into)
    }

    async fn list_bookings_for_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        self.repository
            .list_bookings_for_tenant(tenant_id)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Records a booking request. No availability or overlap checks are made.
    async fn create_booking(&self, booking: NewBooking)
    -> Result<BookingRecord, BookingsServiceError>;

    /// Every booking made by this tenant identifier, oldest first.
    async fn list_bookings_for_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_booking};

    use super::*;

    #[tokio::test]
    #[ignore = "requires docker for testcontainers"]
    async fn booking_is_listed_for_its_tenant_only() -> TestResult {
        let ctx = TestContext::new().await;
        let new = new_booking("123", "u1", "o1");

        let created = ctx.bookings.create_booking(new.clone()).await?;

        assert_eq!(created.uuid, new.uuid);
        assert_eq!(created.status, "pending");

        let mine = ctx.bookings.list_bookings_for_tenant("u1").await?;
        let theirs = ctx.bookings.list_bookings_for_tenant("u2").await?;

        assert_eq!(mine, vec![created]);
        assert!(theirs.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker for testcontainers"]
    async fn duplicate_bookings_are_permitted() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.bookings
            .create_booking(new_booking("123", "u1", "o1"))
            .await?;
        ctx.bookings
            .create_booking(new_booking("123", "u1", "o1"))
            .await?;

        let bookings = ctx.bookings.list_bookings_for_tenant("u1").await?;

        assert_eq!(bookings.len(), 2);

        Ok(())
    }
}
