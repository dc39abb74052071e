//! Property Models

use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use haven_app::domain::properties::records::PropertyRecord;

/// Property listing as sent to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PropertyResponse {
    pub uuid: Uuid,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub owner_contact: String,
    pub property_type: String,

    #[serde(rename = "propertyAdType")]
    pub ad_type: String,

    #[serde(rename = "propertyAddress")]
    pub address: String,

    #[serde(rename = "propertyAmt")]
    pub amount: u64,

    #[serde(rename = "propertyImages")]
    pub images: Vec<String>,

    pub additional_info: String,
    pub created_at: Timestamp,
}

impl From<PropertyRecord> for PropertyResponse {
    fn from(property: PropertyRecord) -> Self {
        Self {
            uuid: property.uuid.into_uuid(),
            owner_id: property.owner_uuid.into_uuid(),
            owner_name: property.owner_name,
            owner_contact: property.owner_contact,
            property_type: property.property_type,
            ad_type: property.ad_type,
            address: property.address,
            amount: property.amount,
            images: property.images,
            additional_info: property.additional_info,
            created_at: property.created_at,
        }
    }
}
