//! Create Booking Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use haven_app::domain::bookings::{data::NewBooking, records::BookingUuid};

use crate::{
    bookings::errors::into_failure,
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
};

/// Contact details of the tenant making the booking.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDetails {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub phone: String,
}

/// Create Booking Request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBookingRequest {
    #[serde(default)]
    pub user_details: UserDetails,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub owner_id: String,
}

impl CreateBookingRequest {
    fn validate(self, property_id: String) -> Result<NewBooking, Failure> {
        require("propertyid", &property_id)?;
        require("userDetails.fullName", &self.user_details.full_name)?;
        require("userDetails.phone", &self.user_details.phone)?;
        require("status", &self.status)?;
        require("userId", &self.user_id)?;
        require("ownerId", &self.owner_id)?;

        Ok(NewBooking {
            uuid: BookingUuid::new(),
            property_id,
            tenant_id: self.user_id,
            owner_id: self.owner_id,
            tenant_name: self.user_details.full_name,
            tenant_phone: self.user_details.phone,
            status: self.status,
        })
    }
}

/// Create Booking Handler
///
/// Records the booking as sent. Nothing checks that the property, tenant or
/// owner exist.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Reply<()>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let property_id = req.param::<String>("propertyid").unwrap_or_default();

    let booking = req
        .json_or_400::<CreateBookingRequest>()
        .await?
        .validate(property_id)?;

    state
        .app
        .bookings
        .create_booking(booking)
        .await
        .map_err(|error| into_failure(error, "failed to create booking"))?;

    Ok(Reply::ok("Booking created successfully"))
}
