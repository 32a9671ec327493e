mod game;
mod genre;

use std::sync::Arc;

pub use game::{GameInput, GameState, GameStore, GenreRef};
pub use genre::{GenreStore, UNKNOWN_GENRE, UNRESOLVED_GENRE_ID};

use crate::{
    api::ApiClient,
    notify::{Confirm, Notifier},
};

/// Client state container. Each instance owns independent stores, so
/// separate instances never share state.
#[derive(Clone)]
pub struct Stores {
    pub genres: GenreStore,
    pub games: GameStore,
}

impl Stores {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>, confirm: Arc<dyn Confirm>) -> Self {
        let genres = GenreStore::new(api.clone(), notifier.clone());
        let games = GameStore::new(api, genres.clone(), notifier, confirm);
        Stores { genres, games }
    }

    /// Loads genres, then games.
    pub async fn load(&self) -> bool {
        let genres = self.genres.fetch_genres().await;
        let games = self.games.fetch_games().await;
        genres && games
    }
}
