//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::envelope::Failure;

/// Map any error to a logged, generic server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, Failure>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, Failure> {
        self.map_err(|error| {
            error!("{context}: {error}");

            Failure::internal()
        })
    }
}
