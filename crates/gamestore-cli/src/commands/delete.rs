use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use gamestore_client::{views::render_games, AlwaysConfirm, Confirm};

use crate::{commands::Executor, config::ServerArgs, console::PromptConfirm};

/// Removes a game after confirmation.
#[derive(Parser, Debug)]
pub struct DeleteCmd {
    #[arg(help = "Id of the game to delete")]
    id: i64,
    #[arg(long, short, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Executor for DeleteCmd {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        let confirm: Arc<dyn Confirm> = if self.yes {
            Arc::new(AlwaysConfirm)
        } else {
            Arc::new(PromptConfirm)
        };
        let stores = super::stores(server, confirm);
        if !stores.games.fetch_games().await {
            bail!("Cannot load games");
        }
        if stores.games.delete_game(self.id).await {
            println!("{}", render_games(&stores.games.state()));
        } else if stores.games.state().error.is_some() {
            bail!("Game {} was not deleted", self.id);
        } else {
            println!("Delete cancelled");
        }
        Ok(())
    }
}
