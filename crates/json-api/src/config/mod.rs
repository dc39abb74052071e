//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Haven JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "haven-json", about = "Haven rental marketplace JSON API", long_about = None)]
pub struct ServerConfig {
    /// Server network and static file settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Bearer token and account settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "haven-json",
            "--database-url",
            "postgres://localhost/haven",
            "--jwt-key",
            "secret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8001");
        assert_eq!(config.server.uploads_dir.to_str(), Some("uploads"));
        assert_eq!(config.auth.token_ttl_hours, 24);
        assert!(!config.auth.legacy_account_compat);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn missing_jwt_key_is_an_error() {
        let result =
            ServerConfig::try_parse_from(["haven-json", "--database-url", "postgres://x/y"]);

        assert!(result.is_err(), "JWT key must be required");
    }

    #[test]
    fn token_ttl_converts_to_seconds() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "haven-json",
            "--database-url",
            "postgres://localhost/haven",
            "--jwt-key",
            "secret",
            "--token-ttl-hours",
            "2",
        ])?;

        assert_eq!(config.auth.token_ttl_seconds(), 7_200);

        Ok(())
    }
}
