//! Forgot Password Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use haven_app::auth::{Password, PasswordReset};

use crate::{
    auth::{extract_bearer_token, into_failure},
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
};

/// Forgot Password Request
#[derive(Debug, Deserialize)]
pub(crate) struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Forgot Password Handler
///
/// Outside legacy compatibility mode the caller must hold a bearer token for
/// the account being changed.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Reply<()>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let requested_by = if state.legacy_compat {
        None
    } else {
        let token = extract_bearer_token(req).ok_or_else(|| {
            Failure::unauthorized("Missing or invalid Authorization header")
        })?;

        let user = state
            .app
            .auth
            .authenticate_bearer(token)
            .await
            .map_err(|error| into_failure(error, "failed to authenticate password reset"))?;

        Some(user)
    };

    let request = req.json_or_400::<ForgotPasswordRequest>().await?;

    require("email", &request.email)?;
    require("password", &request.password)?;

    state
        .app
        .auth
        .reset_password(PasswordReset {
            email: request.email,
            password: Password::from(request.password),
            requested_by,
        })
        .await
        .map_err(|error| into_failure(error, "failed to reset password"))?;

    Ok(Reply::ok("Password changed successfully"))
}
