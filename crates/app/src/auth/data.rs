//! Auth Data

use crate::{
    auth::Password,
    domain::users::records::{Role, UserRecord, UserUuid},
};

/// Account registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: Password,
    pub role: Role,
}

/// Login attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

/// Password change for the account with `email`.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReset {
    pub email: String,
    pub password: Password,

    /// Authenticated caller. When set, the reset only goes through if the
    /// caller owns the account; `None` skips that check entirely.
    pub requested_by: Option<UserUuid>,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}
