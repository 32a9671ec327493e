use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use gamestore_client::{
    views::{render_games, SearchForm, SearchMode},
    AlwaysConfirm,
};

use crate::{commands::Executor, config::ServerArgs};

/// Finds games by id or by genre name. Without a query lists all games.
#[derive(Parser, Debug)]
pub struct SearchCmd {
    #[arg(long, default_value = "id", help = "Search mode: id or genre")]
    by: SearchMode,
    #[arg(help = "Game id or genre name")]
    query: Option<String>,
}

impl Executor for SearchCmd {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        let stores = super::stores(server, Arc::new(AlwaysConfirm));
        let form = SearchForm::new(self.by, self.query.unwrap_or_default());
        if !form.submit(&stores.games).await? {
            bail!("Search failed");
        }
        println!("{}", render_games(&stores.games.state()));
        Ok(())
    }
}
