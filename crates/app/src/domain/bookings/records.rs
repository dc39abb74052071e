//! Booking Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// Booking Record
///
/// Property, tenant and owner references are the identifiers the client sent,
/// stored verbatim. Nothing checks that they point at existing rows, and the
/// same tenant may book the same property any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub uuid: BookingUuid,
    pub property_id: String,
    pub tenant_id: String,
    pub owner_id: String,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub status: String,
    pub created_at: Timestamp,
}
