//! Property Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{Failure, Reply},
    extensions::*,
    properties::models::PropertyResponse,
    state::State,
};

/// Property Index Handler
///
/// Every listing, oldest first. An empty store answers `404`, which existing
/// clients rely on.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Reply<Vec<PropertyResponse>>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let properties = state
        .app
        .properties
        .list_properties()
        .await
        .or_500("failed to fetch properties")?;

    if properties.is_empty() {
        return Err(Failure::not_found("No properties available"));
    }

    Ok(Reply::data(
        properties.into_iter().map(Into::into).collect(),
    ))
}
