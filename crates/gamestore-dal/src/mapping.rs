//! Conversions between stored entities and transfer shapes.

use gamestore_types::{CreateGame, GameDetail, GameSummary, GenreDto, UpdateGame};

use crate::{error::Result, game::Game, genre::Genre, Error};

impl From<CreateGame> for Game {
    /// Id stays 0 until the row is inserted.
    fn from(value: CreateGame) -> Self {
        Game {
            id: 0,
            name: value.name,
            genre_id: value.genre_id,
            genre: None,
            price: value.price,
            release_date: value.release_date,
        }
    }
}

impl Game {
    pub fn from_update(id: i64, value: UpdateGame) -> Self {
        Game {
            id,
            name: value.name,
            genre_id: value.genre_id,
            genre: None,
            price: value.price,
            release_date: value.release_date,
        }
    }

    /// Copies mutable fields from `other`, id is kept.
    pub fn assign(&mut self, other: Game) {
        self.name = other.name;
        if self.genre_id != other.genre_id {
            self.genre = None;
        }
        self.genre_id = other.genre_id;
        self.price = other.price;
        self.release_date = other.release_date;
    }

    /// Requires genre to be loaded.
    pub fn to_summary(&self) -> Result<GameSummary> {
        let genre = self.genre.as_ref().ok_or(Error::RelationNotLoaded("genre"))?;
        Ok(GameSummary {
            id: self.id,
            name: self.name.clone(),
            genre: genre.name.clone(),
            price: self.price,
            release_date: self.release_date,
        })
    }

    pub fn to_detail(&self) -> GameDetail {
        GameDetail {
            id: self.id,
            name: self.name.clone(),
            genre_id: self.genre_id,
            price: self.price,
            release_date: self.release_date,
        }
    }
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        GenreDto {
            id: value.id,
            name: value.name,
        }
    }
}
