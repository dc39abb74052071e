//! Properties service errors.

use thiserror::Error;

/// Listings are keyed by freshly minted uuids and carry no foreign keys, so
/// storage failures are the only way a property call can fail.
#[derive(Debug, Error)]
pub enum PropertiesServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
