//! Bookings Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::bookings::{
    data::NewBooking,
    records::{BookingRecord, BookingUuid},
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const LIST_BOOKINGS_FOR_TENANT_SQL: &str = include_str!("sql/list_bookings_for_tenant.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgBookingsRepository {
    pool: PgPool,
}

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.property_id)
            .bind(booking.tenant_id)
            .bind(booking.owner_id)
            .bind(booking.tenant_name)
            .bind(booking.tenant_phone)
            .bind(booking.status)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_bookings_for_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_FOR_TENANT_SQL)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            property_id: row.try_get("property_id")?,
            tenant_id: row.try_get("tenant_id")?,
            owner_id: row.try_get("owner_id")?,
            tenant_name: row.try_get("tenant_name")?,
            tenant_phone: row.try_get("tenant_phone")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
