use std::sync::Arc;

use clap::Parser;
use gamestore_client::{views::render_games, AlwaysConfirm, GameInput, GenreRef};
use rust_decimal::Decimal;
use time::Date;

use crate::{commands::Executor, config::ServerArgs};

/// Adds a new game to the catalog.
#[derive(Parser, Debug)]
pub struct CreateCmd {
    #[arg(long, help = "Game name, up to 50 characters")]
    name: String,
    #[arg(long, value_parser = super::parse_genre, help = "Genre id or name")]
    genre: GenreRef,
    #[arg(long, help = "Price between 1 and 100")]
    price: Decimal,
    #[arg(long, value_parser = super::parse_date, help = "Release date as YYYY-MM-DD")]
    release_date: Date,
}

impl Executor for CreateCmd {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()> {
        let stores = super::stores(server, Arc::new(AlwaysConfirm));
        let input = GameInput {
            name: self.name,
            genre: self.genre,
            price: self.price,
            release_date: self.release_date,
        };
        let created = stores
            .games
            .create_game(input)
            .await
            .ok_or_else(|| anyhow::anyhow!("Game was not created"))?;
        println!("Created game {} with id {}", created.name, created.id);
        println!("{}", render_games(&stores.games.state()));
        Ok(())
    }
}
