//! Response envelope
//!
//! Every marketplace endpoint answers with the same JSON shape,
//! `{ success, message?, data?, token?, user? }`, whatever the status code.

use salvo::{
    Response,
    http::StatusCode,
    writing::{Json, Scribe},
};
use serde::Serialize;

/// Message sent for any failure the client cannot act on.
pub(crate) const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please try again later";

/// The JSON body.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<T>,
}

/// A status code paired with its envelope.
#[derive(Debug)]
pub(crate) struct Reply<T> {
    status: StatusCode,
    envelope: Envelope<T>,
}

/// Error half of every handler result.
pub(crate) type Failure = Reply<()>;

impl<T> Reply<T> {
    /// `200` carrying `data`.
    pub(crate) fn data(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope {
                success: true,
                message: None,
                data: Some(data),
                token: None,
                user: None,
            },
        }
    }

    /// `200` carrying a fresh token and the signed-in user.
    pub(crate) fn session(message: &str, token: String, user: T) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope {
                success: true,
                message: Some(message.to_string()),
                data: None,
                token: Some(token),
                user: Some(user),
            },
        }
    }
}

impl Reply<()> {
    /// A message-only reply; `success` follows the status class.
    pub(crate) fn message(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            envelope: Envelope {
                success: status.is_success(),
                message: Some(message.to_string()),
                data: None,
                token: None,
                user: None,
            },
        }
    }

    pub(crate) fn ok(message: &str) -> Self {
        Self::message(StatusCode::OK, message)
    }

    pub(crate) fn created(message: &str) -> Self {
        Self::message(StatusCode::CREATED, message)
    }

    pub(crate) fn bad_request(message: &str) -> Self {
        Self::message(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: &str) -> Self {
        Self::message(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn forbidden(message: &str) -> Self {
        Self::message(StatusCode::FORBIDDEN, message)
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self::message(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: &str) -> Self {
        Self::message(StatusCode::CONFLICT, message)
    }

    /// Generic `500`. Callers log the cause; it never reaches the client.
    pub(crate) fn internal() -> Self {
        Self::message(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
    }
}

impl<T> Scribe for Reply<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.envelope));
    }
}
