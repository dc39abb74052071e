//! Booking Data

use crate::domain::bookings::records::BookingUuid;

/// New Booking Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub uuid: BookingUuid,
    pub property_id: String,
    pub tenant_id: String,
    pub owner_id: String,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub status: String,
}
