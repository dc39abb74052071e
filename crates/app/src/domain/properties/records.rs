//! Property Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Property UUID
pub type PropertyUuid = TypedUuid<PropertyRecord>;

/// Property Record
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub uuid: PropertyUuid,

    /// Listing owner. Not checked against the users table.
    pub owner_uuid: UserUuid,

    pub owner_name: String,
    pub owner_contact: String,

    /// Residential, commercial, land and so on.
    pub property_type: String,

    /// Rent or sale.
    pub ad_type: String,

    pub address: String,
    pub amount: u64,

    /// Paths relative to the uploads directory.
    pub images: Vec<String>,

    pub additional_info: String,
    pub created_at: Timestamp,
}
