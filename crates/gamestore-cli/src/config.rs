use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::commands::{
    add_genre::AddGenreCmd, create::CreateCmd, delete::DeleteCmd, edit::EditCmd, list::ListCmd,
    search::SearchCmd,
};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "CLI for the game catalog - lists, searches, creates, edits and deletes games."
)]
pub struct CliConfig {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long,
        global = true,
        env = "GAMESTORE_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the game catalog server"
    )]
    pub url: Url,
}

#[derive(Subcommand)]
pub enum Command {
    List(ListCmd),
    Search(SearchCmd),
    Create(CreateCmd),
    Edit(EditCmd),
    Delete(DeleteCmd),
    AddGenre(AddGenreCmd),
}

impl crate::commands::Executor for Command {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        match self {
            Command::List(cmd) => cmd.run(server).await,
            Command::Search(cmd) => cmd.run(server).await,
            Command::Create(cmd) => cmd.run(server).await,
            Command::Edit(cmd) => cmd.run(server).await,
            Command::Delete(cmd) => cmd.run(server).await,
            Command::AddGenre(cmd) => cmd.run(server).await,
        }
    }
}
