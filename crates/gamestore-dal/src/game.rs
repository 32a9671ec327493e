use std::str::FromStr as _;

use crate::{
    error::Result, genre::genre_exists, genre::Genre, ChosenDB, ChosenRow, Error, FromRowPrefixed,
};
use futures::TryStreamExt as _;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{Acquire as _, Pool, Row as _};
use tracing::debug;

/// Stored game. `genre` is filled only by queries that join the genre table.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub genre_id: i64,
    pub genre: Option<Genre>,
    pub price: Decimal,
    pub release_date: time::Date,
}

impl sqlx::FromRow<'_, ChosenRow> for Game {
    fn from_row(row: &ChosenRow) -> Result<Self, sqlx::Error> {
        let genre = match row.try_get::<Option<String>, _>("genre_name") {
            Ok(Some(_)) => Some(Genre::from_row_prefixed(row)?),
            Ok(None) | Err(sqlx::Error::ColumnNotFound(_)) => None,
            Err(e) => return Err(e),
        };
        let price: String = row.try_get("price")?;
        let price = Decimal::from_str(&price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;
        Ok(Game {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            genre_id: row.try_get("genre_id")?,
            genre,
            price,
            release_date: row.try_get("release_date")?,
        })
    }
}

pub type GameRepository = GameRepositoryImpl<Pool<ChosenDB>>;

pub struct GameRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> GameRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = ChosenDB> + sqlx::Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// All games with their genre loaded.
    pub async fn list(&self) -> Result<Vec<Game>> {
        const SQL: &str = r#"
        SELECT g.id, g.name, g.genre_id, g.price, g.release_date,
        ge.name AS genre_name
        FROM game g
        JOIN genre ge ON g.genre_id = ge.id
        ORDER BY g.id
        "#;
        let records = sqlx::query_as::<_, Game>(SQL)
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    /// Single game, genre is not loaded.
    pub async fn get(&self, id: i64) -> Result<Game> {
        get(id, &self.executor).await
    }

    pub async fn create(&self, game: Game) -> Result<Game> {
        let mut transaction = self.executor.begin().await?;
        if !genre_exists(game.genre_id, &mut *transaction).await? {
            return Err(Error::UnknownGenre(game.genre_id));
        }
        let result = sqlx::query(
            "INSERT INTO game (name, genre_id, price, release_date) VALUES (?, ?, ?, ?)",
        )
        .bind(&game.name)
        .bind(game.genre_id)
        .bind(game.price.to_string())
        .bind(game.release_date)
        .execute(&mut *transaction)
        .await?;

        let id = result.last_insert_rowid();
        let record = get(id, &mut *transaction).await?;
        transaction.commit().await?;
        debug!("Created game {id}");
        Ok(record)
    }

    /// Overwrites mutable fields of the stored game with id `game.id`.
    pub async fn update(&self, game: Game) -> Result<Game> {
        let mut transaction = self.executor.begin().await?;
        let mut existing = get(game.id, &mut *transaction).await?;
        if !genre_exists(game.genre_id, &mut *transaction).await? {
            return Err(Error::UnknownGenre(game.genre_id));
        }
        existing.assign(game);

        sqlx::query("UPDATE game SET name = ?, genre_id = ?, price = ?, release_date = ? WHERE id = ?")
            .bind(&existing.name)
            .bind(existing.genre_id)
            .bind(existing.price.to_string())
            .bind(existing.release_date)
            .bind(existing.id)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        debug!("Updated game {}", existing.id);
        Ok(existing)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let res = sqlx::query("DELETE FROM game WHERE id = ?")
            .bind(id)
            .execute(&self.executor)
            .await?;
        let deleted = res.rows_affected() > 0;
        if !deleted {
            debug!("Game {id} not present, nothing to delete");
        }
        Ok(deleted)
    }
}

async fn get<'c, E>(id: i64, executor: E) -> Result<Game>
where
    E: sqlx::Executor<'c, Database = ChosenDB>,
{
    sqlx::query_as::<_, Game>(
        "SELECT id, name, genre_id, price, release_date FROM game WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| Error::RecordNotFound("Game".to_string()))
}
