//! Auth Config

use clap::Args;

/// Bearer token and account settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_KEY", hide_env_values = true)]
    pub jwt_key: String,

    /// Bearer token lifetime in hours
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value_t = 24_u32)]
    pub token_ttl_hours: u32,

    /// Allow unauthenticated password resets and return password hashes
    /// from the identity lookup
    #[arg(long, env = "LEGACY_ACCOUNT_COMPAT", default_value_t = false)]
    pub legacy_account_compat: bool,
}

impl AuthConfig {
    /// Token lifetime in seconds.
    #[must_use]
    pub fn token_ttl_seconds(&self) -> i64 {
        i64::from(self.token_ttl_hours) * 3_600
    }
}
