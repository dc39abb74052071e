//! Typed request bodies.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope::Failure;

/// Message for bodies that are not the JSON the endpoint expects.
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

pub(crate) trait RequestExt {
    /// Deserialize the JSON body, or answer `400`.
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, Failure>;
}

impl RequestExt for Request {
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, Failure> {
        self.parse_json::<T>().await.map_err(|source| {
            debug!("rejected request body: {source}");

            Failure::bad_request(INVALID_BODY_MESSAGE)
        })
    }
}

/// Presence check: `value` must be non-empty once trimmed.
pub(crate) fn require(field: &str, value: &str) -> Result<(), Failure> {
    if value.trim().is_empty() {
        return Err(Failure::bad_request(&format!("{field} is required")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require("email", "  ").is_err());
        assert!(require("email", "").is_err());
    }

    #[test]
    fn present_values_pass() {
        assert!(require("email", "a@x.com").is_ok());
    }
}
