//! Test Helpers

use crate::domain::{
    bookings::{data::NewBooking, records::BookingUuid},
    properties::{data::NewProperty, records::PropertyUuid},
    users::{
        data::NewUser,
        records::{GrantStatus, Role, UserUuid},
    },
};

pub(crate) fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role,
        grant_status: GrantStatus::for_role(role),
    }
}

pub(crate) fn new_property(owner: UserUuid, amount: u64) -> NewProperty {
    NewProperty {
        uuid: PropertyUuid::new(),
        owner_uuid: owner,
        owner_name: "Olive Owner".to_string(),
        owner_contact: "555-0100".to_string(),
        property_type: "residential".to_string(),
        ad_type: "rent".to_string(),
        address: "1 Main St".to_string(),
        amount,
        images: vec!["property-1.jpg".to_string()],
        additional_info: "Two bedrooms".to_string(),
    }
}

pub(crate) fn new_booking(property: &str, tenant: &str, owner: &str) -> NewBooking {
    NewBooking {
        uuid: BookingUuid::new(),
        property_id: property.to_string(),
        tenant_id: tenant.to_string(),
        owner_id: owner.to_string(),
        tenant_name: "A".to_string(),
        tenant_phone: "555".to_string(),
        status: "pending".to_string(),
    }
}
