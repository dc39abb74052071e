use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct PropertyCommand {
    #[command(subcommand)]
    command: PropertySubcommand,
}

#[derive(Debug, Subcommand)]
enum PropertySubcommand {
    /// Add a listing on behalf of an owner
    Create(create::CreatePropertyArgs),
}

pub(crate) async fn run(command: PropertyCommand) -> Result<(), String> {
    match command.command {
        PropertySubcommand::Create(args) => create::run(args).await,
    }
}
