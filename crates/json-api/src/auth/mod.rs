//! Authentication

mod errors;
pub(crate) mod middleware;

pub(crate) use errors::{USER_NOT_FOUND, into_failure};
pub(crate) use middleware::extract_bearer_token;
