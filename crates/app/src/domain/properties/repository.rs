//! Properties Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    properties::{
        data::NewProperty,
        records::{PropertyRecord, PropertyUuid},
    },
    users::records::UserUuid,
};

const LIST_PROPERTIES_SQL: &str = include_str!("sql/list_properties.sql");
const CREATE_PROPERTY_SQL: &str = include_str!("sql/create_property.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgPropertiesRepository {
    pool: PgPool,
}

impl PgPropertiesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list_properties(&self) -> Result<Vec<PropertyRecord>, sqlx::Error> {
        query_as::<Postgres, PropertyRecord>(LIST_PROPERTIES_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn create_property(
        &self,
        property: NewProperty,
    ) -> Result<PropertyRecord, sqlx::Error> {
        let amount_i64 = i64::try_from(property.amount).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, PropertyRecord>(CREATE_PROPERTY_SQL)
            .bind(property.uuid.into_uuid())
            .bind(property.owner_uuid.into_uuid())
            .bind(property.owner_name)
            .bind(property.owner_contact)
            .bind(property.property_type)
            .bind(property.ad_type)
            .bind(property.address)
            .bind(amount_i64)
            .bind(property.images)
            .bind(property.additional_info)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PropertyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount_i64: i64 = row.try_get("amount")?;

        let amount = u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: PropertyUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            owner_name: row.try_get("owner_name")?,
            owner_contact: row.try_get("owner_contact")?,
            property_type: row.try_get("property_type")?,
            ad_type: row.try_get("ad_type")?,
            address: row.try_get("address")?,
            amount,
            images: row.try_get("images")?,
            additional_info: row.try_get("additional_info")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
