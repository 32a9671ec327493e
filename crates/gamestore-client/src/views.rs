//! Terminal renditions of the catalog screens: the games table, the search
//! box and the edit form.

use std::{fmt::Write as _, str::FromStr};

use gamestore_types::{GameDetail, GameSummary};
use rust_decimal::Decimal;
use time::Date;

use crate::store::{GameInput, GameState, GameStore, GenreRef};

const HEADERS: [&str; 5] = ["ID", "Name", "Genre", "Price", "Release Date"];

fn row(game: &GameSummary) -> [String; 5] {
    [
        game.id.to_string(),
        game.name.clone(),
        game.genre.clone(),
        format!("${:.2}", game.price),
        game.release_date.to_string(),
    ]
}

pub fn render_games(state: &GameState) -> String {
    if state.loading {
        return "Loading...".to_string();
    }
    if let Some(ref error) = state.error {
        return format!("Error: {error}");
    }
    render_table(&state.games)
}

pub fn render_table(games: &[GameSummary]) -> String {
    if games.is_empty() {
        return "No games".to_string();
    }
    let rows: Vec<_> = games.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (width, cell) in widths.iter_mut().zip(r) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let formatted: Vec<_> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", formatted.join(" | ").trim_end());
    };
    line(&HEADERS.map(String::from));
    line(&widths.map(|w| "-".repeat(w)));
    for r in &rows {
        line(r);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Id,
    Genre,
}

impl FromStr for SearchMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SearchMode::Id),
            "genre" => Ok(SearchMode::Genre),
            other => Err(ViewError::InvalidInput(format!("unknown search mode {other}"))),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub mode: SearchMode,
    pub query: String,
}

impl SearchForm {
    pub fn new(mode: SearchMode, query: impl Into<String>) -> Self {
        SearchForm {
            mode,
            query: query.into(),
        }
    }

    /// Runs the search, an empty query shows all games.
    pub async fn submit(&self, store: &GameStore) -> Result<bool, ViewError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Ok(store.fetch_games().await);
        }
        match self.mode {
            SearchMode::Id => {
                let id: i64 = query
                    .parse()
                    .map_err(|_| ViewError::InvalidInput(format!("{query} is not a game id")))?;
                Ok(store.search_by_id(id).await)
            }
            SearchMode::Genre => Ok(store.search_by_genre(query).await),
        }
    }
}

/// Edit dialog state for one game, prefilled from the stored record.
///
/// The genre stays referenced by id until the user picks another one by
/// name, genre names need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub id: i64,
    pub name: String,
    pub genre: GenreRef,
    pub price: Decimal,
    pub release_date: Date,
}

impl EditForm {
    pub fn open(game: &GameDetail) -> Self {
        EditForm {
            id: game.id,
            name: game.name.clone(),
            genre: GenreRef::Id(game.genre_id),
            price: game.price,
            release_date: game.release_date,
        }
    }

    pub fn set_genre_name(&mut self, name: impl Into<String>) {
        self.genre = GenreRef::Name(name.into());
    }

    pub fn input(&self) -> GameInput {
        GameInput {
            name: self.name.clone(),
            genre: self.genre.clone(),
            price: self.price,
            release_date: self.release_date,
        }
    }

    pub async fn confirm(self, store: &GameStore) -> bool {
        store.edit_game(self.id, self.input()).await
    }
}
