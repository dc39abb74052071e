use clap::{Args, Subcommand};

mod grant;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Approve (or revoke) an account
    Grant(grant::GrantArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Grant(args) => grant::run(args).await,
    }
}
