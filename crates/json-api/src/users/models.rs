//! User Models

use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use haven_app::domain::users::records::{GrantStatus, Role, UserRecord};

/// User as sent to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,

    #[serde(rename = "type")]
    pub role: Role,

    pub granted: GrantStatus,
    pub created_at: Timestamp,

    /// Stored password hash. Only ever set in legacy compatibility mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserResponse {
    /// Everything except the password hash.
    pub(crate) fn redacted(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            name: user.name,
            email: user.email,
            role: user.role,
            granted: user.grant_status,
            created_at: user.created_at,
            password: None,
        }
    }

    pub(crate) fn with_password_hash(user: UserRecord) -> Self {
        let password = Some(user.password_hash.clone());

        Self {
            password,
            ..Self::redacted(user)
        }
    }
}
