use std::sync::Arc;

use anyhow::{bail, Context as _};
use clap::Parser;
use gamestore_client::{
    views::{render_games, EditForm},
    AlwaysConfirm, GenreRef,
};
use rust_decimal::Decimal;
use time::Date;

use crate::{commands::Executor, config::ServerArgs};

/// Changes an existing game. Fields not given keep their current values.
#[derive(Parser, Debug)]
pub struct EditCmd {
    #[arg(help = "Id of the game to edit")]
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, value_parser = super::parse_genre, help = "Genre id or name")]
    genre: Option<GenreRef>,
    #[arg(long)]
    price: Option<Decimal>,
    #[arg(long, value_parser = super::parse_date, help = "Release date as YYYY-MM-DD")]
    release_date: Option<Date>,
}

impl Executor for EditCmd {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        let stores = super::stores(server, Arc::new(AlwaysConfirm));
        let current = stores
            .games
            .fetch_game(self.id)
            .await
            .with_context(|| format!("Cannot edit game {}", self.id))?;

        let mut form = EditForm::open(&current);
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(genre) = self.genre {
            form.genre = genre;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(release_date) = self.release_date {
            form.release_date = release_date;
        }
        if !form.confirm(&stores.games).await {
            bail!("Game {} was not updated", self.id);
        }
        println!("{}", render_games(&stores.games.state()));
        Ok(())
    }
}
