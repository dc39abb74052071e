//! Register Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use haven_app::{
    auth::{Password, Registration},
    domain::users::records::Role,
};

use crate::{
    auth::into_failure,
    envelope::{Failure, Reply},
    extensions::*,
    state::State,
};

/// Register Request
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default, rename = "type")]
    pub role: Option<Role>,
}

impl RegisterRequest {
    fn validate(self) -> Result<Registration, Failure> {
        require("email", &self.email)?;
        require("password", &self.password)?;

        let role = self.role.ok_or_else(|| Failure::bad_request("type is required"))?;

        Ok(Registration {
            name: self.name,
            email: self.email,
            password: Password::from(self.password),
            role,
        })
    }
}

/// Register Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Reply<()>, Failure> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let registration = req.json_or_400::<RegisterRequest>().await?.validate()?;

    state
        .app
        .auth
        .register(registration)
        .await
        .map_err(|error| into_failure(error, "failed to register user"))?;

    Ok(Reply::created("Register Success"))
}
