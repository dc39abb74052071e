//! Booking Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use crate::{
    bookings::{errors::into_failure, models::BookingResponse},
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
};

/// Tenant Bookings Request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TenantBookingsRequest {
    #[serde(default)]
    pub user_id: String,
}

/// Booking Index Handler
///
/// Bookings made by one tenant, oldest first.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Reply<Vec<BookingResponse>>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = req.json_or_400::<TenantBookingsRequest>().await?;

    require("userId", &request.user_id)?;

    let bookings = state
        .app
        .bookings
        .list_bookings_for_tenant(&request.user_id)
        .await
        .map_err(|error| into_failure(error, "failed to fetch bookings"))?;

    if bookings.is_empty() {
        return Err(Failure::not_found("No bookings found"));
    }

    Ok(Reply::data(bookings.into_iter().map(Into::into).collect()))
}
