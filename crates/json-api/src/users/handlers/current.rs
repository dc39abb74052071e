//! Current User Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
    users::{errors::into_failure, models::UserResponse},
};

/// Current User Handler
///
/// Looks up the account behind the bearer token.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Reply<UserResponse>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user_uuid = depot.user_uuid_or_401()?;

    let user = state
        .app
        .users
        .get_user(user_uuid)
        .await
        .map_err(|error| into_failure(error, "failed to fetch user"))?;

    let user = if state.legacy_compat {
        UserResponse::with_password_hash(user)
    } else {
        UserResponse::redacted(user)
    };

    Ok(Reply::data(user))
}
