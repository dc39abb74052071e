//! Properties service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::properties::{
    data::NewProperty, errors::PropertiesServiceError, records::PropertyRecord,
    repository::PgPropertiesRepository,
};

#[derive(Debug, Clone)]
pub struct PgPropertiesService {
    repository: PgPropertiesRepository,
}

impl PgPropertiesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgPropertiesRepository::new(pool),
        }
    }
}

#[async_trait]
impl PropertiesService for PgPropertiesService {
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertiesServiceError> {
        self.repository.list_properties().await.map_err(Into::into)
    }

    async fn create_property(
        &self,
        property: NewProperty,
    ) -> Result<PropertyRecord, PropertiesServiceError> {
        self.repository
            .create_property(property)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait PropertiesService: Send + Sync {
    /// Retrieves every listing, oldest first. An empty store yields an empty list.
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertiesServiceError>;

    /// Creates a new listing.
    async fn create_property(
        &self,
        property: NewProperty,
    ) -> Result<PropertyRecord, PropertiesServiceError>;
}
