use std::sync::Arc;

use gamestore_types::GenreDto;
use tokio::sync::watch;

use crate::{
    api::ApiClient,
    notify::{Notification, Notifier},
};

/// Returned by [`GenreStore::genre_name_by_id`] when the id is not known.
pub const UNKNOWN_GENRE: &str = "Unknown";
/// Returned by [`GenreStore::genre_id_by_name`] when the name is not known.
pub const UNRESOLVED_GENRE_ID: i64 = 0;

#[derive(Clone)]
pub struct GenreStore {
    inner: Arc<GenreStoreInner>,
}

struct GenreStoreInner {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    genres: watch::Sender<Vec<GenreDto>>,
}

impl GenreStore {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        let (genres, _) = watch::channel(Vec::new());
        GenreStore {
            inner: Arc::new(GenreStoreInner {
                api,
                notifier,
                genres,
            }),
        }
    }

    /// Replaces the collection without asking the server.
    pub fn set_genres(&self, genres: Vec<GenreDto>) {
        self.inner.genres.send_replace(genres);
    }

    pub async fn fetch_genres(&self) -> bool {
        match self.inner.api.list_genres().await {
            Ok(genres) => {
                self.set_genres(genres);
                true
            }
            Err(e) => {
                self.inner
                    .notifier
                    .notify(Notification::error(format!("Cannot load genres: {e}")));
                false
            }
        }
    }

    pub fn genres(&self) -> Vec<GenreDto> {
        self.inner.genres.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.genres.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<GenreDto>> {
        self.inner.genres.subscribe()
    }

    pub fn genre_name_by_id(&self, id: i64) -> String {
        self.inner
            .genres
            .borrow()
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| UNKNOWN_GENRE.to_string())
    }

    /// Case insensitive lookup, [`UNRESOLVED_GENRE_ID`] if no genre matches.
    pub fn genre_id_by_name(&self, name: &str) -> i64 {
        let name = name.to_lowercase();
        self.inner
            .genres
            .borrow()
            .iter()
            .find(|g| g.name.to_lowercase() == name)
            .map(|g| g.id)
            .unwrap_or(UNRESOLVED_GENRE_ID)
    }
}
