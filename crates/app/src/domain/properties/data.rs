//! Property Data

use crate::domain::{properties::records::PropertyUuid, users::records::UserUuid};

/// New Property Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub uuid: PropertyUuid,
    pub owner_uuid: UserUuid,
    pub owner_name: String,
    pub owner_contact: String,
    pub property_type: String,
    pub ad_type: String,
    pub address: String,
    pub amount: u64,
    pub images: Vec<String>,
    pub additional_info: String,
}
