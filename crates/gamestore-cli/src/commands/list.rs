use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use gamestore_client::{views::render_games, AlwaysConfirm};

use crate::{commands::Executor, config::ServerArgs};

/// Shows all games as a table.
#[derive(Parser, Debug)]
pub struct ListCmd {}

impl Executor for ListCmd {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        let stores = super::stores(server, Arc::new(AlwaysConfirm));
        if !stores.load().await {
            bail!("Cannot list games");
        }
        println!("{}", render_games(&stores.games.state()));
        Ok(())
    }
}
