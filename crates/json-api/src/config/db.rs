//! Database Config

use clap::Args;

/// Record store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string, opened once at startup
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
