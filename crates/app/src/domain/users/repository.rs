//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::users::{
    data::NewUser,
    records::{GrantStatus, Role, UserRecord, UserUuid},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const UPDATE_PASSWORD_SQL: &str = include_str!("sql/update_password.sql");
const SET_GRANT_STATUS_SQL: &str = include_str!("sql/set_grant_status.sql");

/// PostgreSQL-backed users repository.
#[derive(Debug, Clone)]
pub(crate) struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.name)
            .bind(user.email)
            .bind(user.password_hash)
            .bind(user.role.as_str())
            .bind(user.grant_status.as_str())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn get_user(&self, user: UserUuid) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    /// Swap the stored hash in a single statement; `RowNotFound` when no
    /// account has this email.
    pub(crate) async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(UPDATE_PASSWORD_SQL)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn set_grant_status(
        &self,
        email: &str,
        grant_status: GrantStatus,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(SET_GRANT_STATUS_SQL)
            .bind(email)
            .bind(grant_status.as_str())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role = row
            .try_get::<String, _>("role")?
            .parse::<Role>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: Box::new(e),
            })?;

        let grant_status = row
            .try_get::<String, _>("grant_status")?
            .parse::<GrantStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "grant_status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role,
            grant_status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
