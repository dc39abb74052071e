use clap::{Parser, Subcommand};

mod db;
mod property;
mod user;

#[derive(Debug, Parser)]
#[command(name = "haven-app", about = "Haven marketplace operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Property(property::PropertyCommand),
    User(user::UserCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Property(command) => property::run(command).await,
            Commands::User(command) => user::run(command).await,
        }
    }
}
