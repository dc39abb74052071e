//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{
        AuthServiceError, Credentials, PasswordReset, Registration, Session, TokenIssuer,
        hash_password, verify_password,
    },
    domain::users::{
        UsersService,
        data::NewUser,
        records::{GrantStatus, UserRecord, UserUuid},
    },
};

/// Password-based accounts on top of the users store.
#[derive(Clone)]
pub struct PasswordAuthService {
    users: Arc<dyn UsersService>,
    tokens: TokenIssuer,
}

impl PasswordAuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UsersService>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for PasswordAuthService {
    async fn register(&self, registration: Registration) -> Result<UserRecord, AuthServiceError> {
        if self
            .users
            .find_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AuthServiceError::AlreadyExists);
        }

        let password_hash = hash_password(&registration.password)?;

        let user = self
            .users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                name: registration.name,
                email: registration.email,
                password_hash,
                role: registration.role,
                grant_status: GrantStatus::for_role(registration.role),
            })
            .await?;

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        let user = self
            .users
            .find_user_by_email(&credentials.email)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if !verify_password(&credentials.password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.uuid)?;

        Ok(Session { token, user })
    }

    async fn reset_password(&self, reset: PasswordReset) -> Result<(), AuthServiceError> {
        if let Some(requester) = reset.requested_by {
            let owner = self
                .users
                .find_user_by_email(&reset.email)
                .await?
                .ok_or(AuthServiceError::NotFound)?;

            if owner.uuid != requester {
                return Err(AuthServiceError::Forbidden);
            }
        }

        let password_hash = hash_password(&reset.password)?;

        self.users
            .update_password(&reset.email, &password_hash)
            .await?;

        Ok(())
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        self.tokens.verify(bearer_token).map_err(|source| {
            debug!("rejected bearer token: {source}");

            AuthServiceError::Unauthorized
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account; `AlreadyExists` when the email is taken.
    async fn register(&self, registration: Registration) -> Result<UserRecord, AuthServiceError>;

    /// Checks credentials and issues a bearer token.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;

    /// Replaces the password of the account with the given email.
    async fn reset_password(&self, reset: PasswordReset) -> Result<(), AuthServiceError>;

    /// Resolves a bearer token to the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<UserUuid, AuthServiceError>;
}
