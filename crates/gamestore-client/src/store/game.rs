use std::sync::Arc;

use gamestore_types::{CreateGame, GameDetail, GameSummary, UpdateGame};
use rust_decimal::Decimal;
use time::Date;
use tokio::sync::watch;
use tracing::debug;

use super::genre::{GenreStore, UNRESOLVED_GENRE_ID};
use crate::{
    api::ApiClient,
    notify::{Confirm, Notification, Notifier},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    pub games: Vec<GameSummary>,
    /// Set while a request is in flight. Concurrent actions are not serialized,
    /// the last response to arrive wins.
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreRef {
    Id(i64),
    Name(String),
}

/// Editable fields of a game as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInput {
    pub name: String,
    pub genre: GenreRef,
    pub price: Decimal,
    pub release_date: Date,
}

#[derive(Clone)]
pub struct GameStore {
    inner: Arc<GameStoreInner>,
}

struct GameStoreInner {
    api: ApiClient,
    genres: GenreStore,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    state: watch::Sender<GameState>,
}

impl GameStore {
    pub fn new(
        api: ApiClient,
        genres: GenreStore,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        let (state, _) = watch::channel(GameState::default());
        GameStore {
            inner: Arc::new(GameStoreInner {
                api,
                genres,
                notifier,
                confirm,
                state,
            }),
        }
    }

    pub fn state(&self) -> GameState {
        self.inner.state.borrow().clone()
    }

    pub fn games(&self) -> Vec<GameSummary> {
        self.inner.state.borrow().games.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.inner.state.subscribe()
    }

    pub fn genres(&self) -> &GenreStore {
        &self.inner.genres
    }

    fn begin(&self) {
        self.inner.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self, update: impl FnOnce(&mut Vec<GameSummary>)) {
        self.inner.state.send_modify(|s| {
            update(&mut s.games);
            s.loading = false;
        });
    }

    /// Records the failure and tells the user. Actions that replace the
    /// collection pass `clear` so a failed load leaves an empty list.
    fn fail(&self, message: String, clear: bool) {
        self.inner.state.send_modify(|s| {
            s.loading = false;
            s.error = Some(message.clone());
            if clear {
                s.games.clear();
            }
        });
        self.inner.notifier.notify(Notification::error(message));
    }

    fn notify(&self, notification: Notification) {
        self.inner.notifier.notify(notification);
    }

    async fn ensure_genres(&self) {
        if self.inner.genres.is_empty() {
            self.inner.genres.fetch_genres().await;
        }
    }

    async fn resolve_genre(&self, genre: &GenreRef) -> Option<i64> {
        match genre {
            GenreRef::Id(id) => Some(*id),
            GenreRef::Name(name) => {
                self.ensure_genres().await;
                let id = self.inner.genres.genre_id_by_name(name);
                if id == UNRESOLVED_GENRE_ID {
                    self.fail(format!("Unknown genre {name}"), false);
                    None
                } else {
                    Some(id)
                }
            }
        }
    }

    pub async fn fetch_games(&self) -> bool {
        self.begin();
        match self.inner.api.list_games().await {
            Ok(games) => {
                debug!("Fetched {} games", games.len());
                self.finish(|current| *current = games);
                true
            }
            Err(e) => {
                self.fail(format!("Cannot load games: {e}"), true);
                false
            }
        }
    }

    pub async fn create_game(&self, input: GameInput) -> Option<GameDetail> {
        let genre_id = self.resolve_genre(&input.genre).await?;
        let payload = CreateGame {
            name: input.name,
            genre_id,
            price: input.price,
            release_date: input.release_date,
        };
        self.begin();
        match self.inner.api.create_game(&payload).await {
            Ok(created) => {
                self.notify(Notification::success(format!(
                    "Game {} created",
                    created.name
                )));
                self.fetch_games().await;
                Some(created)
            }
            Err(e) => {
                self.fail(format!("Cannot create game: {e}"), false);
                None
            }
        }
    }

    /// Updates the game, then reloads the whole collection from the server.
    pub async fn edit_game(&self, id: i64, input: GameInput) -> bool {
        let Some(genre_id) = self.resolve_genre(&input.genre).await else {
            return false;
        };
        let payload = UpdateGame {
            name: input.name,
            genre_id,
            price: input.price,
            release_date: input.release_date,
        };
        self.begin();
        match self.inner.api.update_game(id, &payload).await {
            Ok(updated) => {
                self.notify(Notification::success(format!(
                    "Game {} updated",
                    updated.name
                )));
                self.fetch_games().await
            }
            Err(e) => {
                self.fail(format!("Cannot update game {id}: {e}"), false);
                false
            }
        }
    }

    /// Deletes after user confirmation; the local row goes away only once
    /// the server accepted the delete.
    pub async fn delete_game(&self, id: i64) -> bool {
        let label = self
            .inner
            .state
            .borrow()
            .games
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("#{id}"));
        if !self.inner.confirm.confirm(&format!("Delete game {label}?")) {
            debug!("Delete of game {id} cancelled");
            return false;
        }
        self.begin();
        match self.inner.api.delete_game(id).await {
            Ok(()) => {
                self.finish(|games| games.retain(|g| g.id != id));
                self.notify(Notification::success(format!("Game {label} deleted")));
                true
            }
            Err(e) => {
                self.fail(format!("Cannot delete game {label}: {e}"), false);
                false
            }
        }
    }

    /// Loads one game, for example to prefill an edit form. The collection
    /// is left as it is.
    pub async fn fetch_game(&self, id: i64) -> Option<GameDetail> {
        match self.inner.api.get_game(id).await {
            Ok(detail) => Some(detail),
            Err(e) if e.is_not_found() => {
                self.fail(format!("Game {id} not found"), false);
                None
            }
            Err(e) => {
                self.fail(format!("Cannot load game {id}: {e}"), false);
                None
            }
        }
    }

    pub async fn search_by_id(&self, id: i64) -> bool {
        self.ensure_genres().await;
        self.begin();
        match self.inner.api.get_game(id).await {
            Ok(detail) => {
                let summary = GameSummary {
                    id: detail.id,
                    genre: self.inner.genres.genre_name_by_id(detail.genre_id),
                    name: detail.name,
                    price: detail.price,
                    release_date: detail.release_date,
                };
                self.finish(|games| *games = vec![summary]);
                true
            }
            Err(e) if e.is_not_found() => {
                self.fail(format!("Game {id} not found"), true);
                false
            }
            Err(e) => {
                self.fail(format!("Cannot load game {id}: {e}"), true);
                false
            }
        }
    }

    /// Keeps only games whose genre matches `genre`, ignoring case.
    /// No match is reported but is not an error.
    pub async fn search_by_genre(&self, genre: &str) -> bool {
        self.begin();
        match self.inner.api.list_games().await {
            Ok(games) => {
                let wanted = genre.to_lowercase();
                let matches: Vec<_> = games
                    .into_iter()
                    .filter(|g| g.genre.to_lowercase() == wanted)
                    .collect();
                if matches.is_empty() {
                    self.notify(Notification::info(format!(
                        "No games found for genre {genre}"
                    )));
                }
                self.finish(|games| *games = matches);
                true
            }
            Err(e) => {
                self.fail(format!("Cannot search games: {e}"), true);
                false
            }
        }
    }
}
