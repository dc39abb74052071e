//! Login Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use haven_app::auth::{Credentials, Password};

use crate::{
    auth::into_failure,
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
    users::models::UserResponse,
};

/// Login Request
#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    fn validate(self) -> Result<Credentials, Failure> {
        require("email", &self.email)?;
        require("password", &self.password)?;

        Ok(Credentials {
            email: self.email,
            password: Password::from(self.password),
        })
    }
}

/// Login Handler
///
/// Issues a bearer token. The user in the reply never carries a password.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Reply<UserResponse>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let credentials = req.json_or_400::<LoginRequest>().await?.validate()?;

    let session = state
        .app
        .auth
        .login(credentials)
        .await
        .map_err(|error| into_failure(error, "failed to log in"))?;

    Ok(Reply::session(
        "Login successful",
        session.token,
        UserResponse::redacted(session.user),
    ))
}
