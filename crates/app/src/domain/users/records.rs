//! User Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Tenant,
    Owner,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Owner => "Owner",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Tenant" => Ok(Self::Tenant),
            "Owner" => Ok(Self::Owner),
            "Admin" => Ok(Self::Admin),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Whether an account has been approved.
///
/// Owners need an admin to grant them before they may list properties, so they
/// start out ungranted. Every other role is granted on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantStatus {
    Granted,
    Ungranted,
}

impl GrantStatus {
    /// Initial grant status for a newly registered account.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Owner => Self::Ungranted,
            Role::Tenant | Role::Admin => Self::Granted,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Ungranted => "ungranted",
        }
    }
}

impl fmt::Display for GrantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "granted" => Ok(Self::Granted),
            "ungranted" => Ok(Self::Ungranted),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A stored enum column held a value this build does not know about.
#[derive(Debug, Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// Argon2 PHC string; never the plaintext.
    pub password_hash: String,

    pub role: Role,
    pub grant_status: GrantStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
