//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::users::{
    data::NewUser,
    errors::UsersServiceError,
    records::{GrantStatus, UserRecord, UserUuid},
    repository::PgUsersRepository,
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgUsersRepository::new(pool),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        self.repository.create_user(user).await.map_err(Into::into)
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UsersServiceError> {
        self.repository
            .find_user_by_email(email)
            .await
            .map_err(Into::into)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        self.repository.get_user(user).await.map_err(Into::into)
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .update_password(email, password_hash)
            .await
            .map_err(Into::into)
    }

    async fn set_grant_status(
        &self,
        email: &str,
        grant_status: GrantStatus,
    ) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .set_grant_status(email, grant_status)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// User persistence operations.
pub trait UsersService: Send + Sync {
    /// Persists a new user; `AlreadyExists` when the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Looks a user up by exact email.
    async fn find_user_by_email(&self, email: &str)
    -> Result<Option<UserRecord>, UsersServiceError>;

    /// Retrieves a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Replaces the password hash of the user with this email.
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Approves or revokes an account.
    async fn set_grant_status(
        &self,
        email: &str,
        grant_status: GrantStatus,
    ) -> Result<UserRecord, UsersServiceError>;
}
