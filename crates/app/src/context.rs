//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    auth::{AuthService, PasswordAuthService, TokenError, TokenIssuer},
    database,
    domain::{
        bookings::{BookingsService, PgBookingsService},
        properties::{PgPropertiesService, PropertiesService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("invalid token settings")]
    Token(#[source] TokenError),
}

/// Settings for issuing and verifying bearer tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenSettings<'a> {
    pub secret: &'a [u8],
    pub ttl_seconds: i64,
}

/// Services shared by every request, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub properties: Arc<dyn PropertiesService>,
    pub bookings: Arc<dyn BookingsService>,
    pub auth: Arc<dyn AuthService>,
    pool: Option<PgPool>,
}

impl AppContext {
    /// Open the store and build every service on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable or the token settings are unusable.
    pub async fn connect(url: &str, tokens: TokenSettings<'_>) -> Result<Self, AppInitError> {
        let tokens =
            TokenIssuer::new(tokens.secret, tokens.ttl_seconds).map_err(AppInitError::Token)?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let users: Arc<dyn UsersService> = Arc::new(PgUsersService::new(pool.clone()));

        Ok(Self {
            auth: Arc::new(PasswordAuthService::new(Arc::clone(&users), tokens)),
            properties: Arc::new(PgPropertiesService::new(pool.clone())),
            bookings: Arc::new(PgBookingsService::new(pool.clone())),
            users,
            pool: Some(pool),
        })
    }

    /// Assemble a context from already-built services, without a store of its own.
    #[must_use]
    pub fn from_services(
        users: Arc<dyn UsersService>,
        properties: Arc<dyn PropertiesService>,
        bookings: Arc<dyn BookingsService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            users,
            properties,
            bookings,
            auth,
            pool: None,
        }
    }

    /// Close the underlying connection pool, waiting for checked-out connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
