//! Booking Models

use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use haven_app::domain::bookings::records::BookingRecord;

/// Booking as sent to clients.
#[derive(Debug, Serialize)]
pub(crate) struct BookingResponse {
    pub uuid: Uuid,

    #[serde(rename = "propertyId")]
    pub property_id: String,

    #[serde(rename = "userID")]
    pub tenant_id: String,

    #[serde(rename = "ownerID")]
    pub owner_id: String,

    #[serde(rename = "userName")]
    pub tenant_name: String,

    #[serde(rename = "phone")]
    pub tenant_phone: String,

    #[serde(rename = "bookingStatus")]
    pub status: String,

    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

impl From<BookingRecord> for BookingResponse {
    fn from(booking: BookingRecord) -> Self {
        Self {
            uuid: booking.uuid.into_uuid(),
            property_id: booking.property_id,
            tenant_id: booking.tenant_id,
            owner_id: booking.owner_id,
            tenant_name: booking.tenant_name,
            tenant_phone: booking.tenant_phone,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
