use crate::{error::Result, ChosenRow, FromRowPrefixed};
use futures::TryStreamExt as _;
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Row as _};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateGenre {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl FromRowPrefixed for Genre {
    fn from_row_prefixed(row: &ChosenRow) -> Result<Self, sqlx::Error> {
        Ok(Genre {
            id: row.try_get("genre_id")?,
            name: row.try_get("genre_name")?,
        })
    }
}

pub type GenreRepository = GenreRepositoryImpl<Pool<crate::ChosenDB>>;

pub struct GenreRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> GenreRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateGenre) -> Result<Genre> {
        let result = sqlx::query("INSERT INTO genre (name) VALUES (?)")
            .bind(&payload.name)
            .execute(&self.executor)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Created genre {id}");
        self.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Genre>> {
        let records = sqlx::query_as::<_, Genre>("SELECT id, name FROM genre ORDER BY id")
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.executor)
            .await?
            .ok_or_else(|| crate::Error::RecordNotFound("Genre".to_string()))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        genre_exists(id, &self.executor).await
    }
}

pub(crate) async fn genre_exists<'c, E>(id: i64, executor: E) -> Result<bool>
where
    E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM genre WHERE id = ?)")
        .bind(id)
        .fetch_one(executor)
        .await?;
    Ok(exists != 0)
}
