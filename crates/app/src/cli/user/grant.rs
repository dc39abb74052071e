use clap::Args;
use haven_app::{
    database,
    domain::users::{PgUsersService, UsersService, UsersServiceError, records::GrantStatus},
};

#[derive(Debug, Args)]
pub(crate) struct GrantArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Email of the account to update
    #[arg(long)]
    email: String,

    /// Mark the account ungranted instead
    #[arg(long)]
    revoke: bool,
}

pub(crate) async fn run(args: GrantArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let status = if args.revoke {
        GrantStatus::Ungranted
    } else {
        GrantStatus::Granted
    };

    let user = PgUsersService::new(pool)
        .set_grant_status(&args.email, status)
        .await
        .map_err(|error| match error {
            UsersServiceError::NotFound => format!("no user with email {}", args.email),
            other => format!("failed to update grant status: {other}"),
        })?;

    println!("user_uuid: {}", user.uuid);
    println!("role: {}", user.role);
    println!("granted: {}", user.grant_status);

    Ok(())
}
