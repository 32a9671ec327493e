use anyhow::Context as _;
use clap::Parser;
use gamestore_dal::genre::{CreateGenre, GenreRepository};
use garde::Validate as _;
use tracing::info;

use crate::{commands::Executor, config::ServerArgs};

/// Inserts a genre directly into the catalog database.
///
/// The REST API exposes genres read only, so this talks to the database
/// rather than to the server.
#[derive(Parser, Debug)]
pub struct AddGenreCmd {
    #[arg(long, env = "GAMESTORE_DATABASE_URL", help = "Database URL, like sqlite://gamestore.db")]
    database_url: String,
    #[arg(help = "Name of the new genre")]
    name: String,
}

impl Executor for AddGenreCmd {
    async fn run(self, _server: &ServerArgs) -> anyhow::Result<()> {
        let payload = CreateGenre { name: self.name };
        payload.validate().context("Invalid genre")?;

        let pool = gamestore_dal::new_pool(&self.database_url)
            .await
            .context("Cannot open database")?;
        gamestore_dal::migrate(&pool).await?;
        let genre = GenreRepository::new(pool).create(payload).await?;
        info!("Added genre {} with id {}", genre.name, genre.id);
        println!("{}\t{}", genre.id, genre.name);
        Ok(())
    }
}
