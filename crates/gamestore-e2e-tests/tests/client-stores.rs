use std::sync::{Arc, Mutex};

use gamestore_client::{
    views::{EditForm, SearchForm, SearchMode},
    ApiClient, AlwaysConfirm, Confirm, GameInput, GenreRef, Notification, NotificationLevel,
    Notifier, Stores,
};
use gamestore_e2e_tests::{insert_genre, launch_env, prepare_env};
use rust_decimal::Decimal;
use time::macros::date;
use tracing_test::traced_test;

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<Notification>>,
}

impl Recorder {
    fn levels(&self) -> Vec<NotificationLevel> {
        self.seen.lock().unwrap().iter().map(|n| n.level).collect()
    }

    fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}

fn input(name: &str, genre: GenreRef) -> GameInput {
    GameInput {
        name: name.to_string(),
        genre,
        price: Decimal::new(2999, 2),
        release_date: date!(2022 - 05 - 05),
    }
}

#[tokio::test]
#[traced_test]
async fn test_store_lifecycle() {
    let (config, state, _config_guard) = prepare_env("test_store_lifecycle").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let recorder = Arc::new(Recorder::default());
    let stores = Stores::new(
        ApiClient::new(base_url),
        recorder.clone(),
        Arc::new(AlwaysConfirm),
    );

    assert!(stores.load().await);
    assert_eq!(stores.genres.genres().len(), 5);
    assert!(stores.games.games().is_empty());
    assert_eq!(stores.genres.genre_id_by_name("racing"), 4);

    let mut rx = stores.games.subscribe();
    let created = stores
        .games
        .create_game(input("Kart Mania", GenreRef::Name("Racing".to_string())))
        .await
        .unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(created.genre_id, 4);
    let games = stores.games.games();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].genre, "Racing");

    stores
        .games
        .create_game(input("Boxing Night", GenreRef::Id(1)))
        .await
        .unwrap();
    assert_eq!(stores.games.games().len(), 2);

    assert!(stores.games.search_by_id(created.id).await);
    let found = stores.games.games();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Kart Mania");
    assert_eq!(found[0].genre, "Racing");

    let detail = stores.games.fetch_game(created.id).await.unwrap();
    let mut form = EditForm::open(&detail);
    form.name = "Kart Mania Deluxe".to_string();
    assert!(form.confirm(&stores.games).await);
    let games = stores.games.games();
    assert_eq!(games.len(), 2);
    assert!(games.iter().any(|g| g.name == "Kart Mania Deluxe"));

    assert!(
        SearchForm::new(SearchMode::Genre, "FIGHTING")
            .submit(&stores.games)
            .await
            .unwrap()
    );
    let games = stores.games.games();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Boxing Night");

    assert!(
        SearchForm::new(SearchMode::Genre, "Sports")
            .submit(&stores.games)
            .await
            .unwrap()
    );
    assert!(stores.games.games().is_empty());
    assert_eq!(recorder.last().unwrap().level, NotificationLevel::Info);

    assert!(SearchForm::new(SearchMode::Id, "").submit(&stores.games).await.unwrap());
    assert_eq!(stores.games.games().len(), 2);

    assert!(stores.games.delete_game(created.id).await);
    let games = stores.games.games();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Boxing Night");
    assert!(!recorder.levels().contains(&NotificationLevel::Error));
}

#[tokio::test]
#[traced_test]
async fn test_store_failures() {
    let (config, state, _config_guard) = prepare_env("test_store_failures").await.unwrap();
    insert_genre(&state, "Puzzle").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let recorder = Arc::new(Recorder::default());
    let stores = Stores::new(ApiClient::new(base_url), recorder.clone(), Arc::new(Decline));
    assert!(stores.load().await);
    assert_eq!(stores.genres.genre_id_by_name("puzzle"), 6);

    let created = stores
        .games
        .create_game(input("Blocks", GenreRef::Name("Puzzle".to_string())))
        .await
        .unwrap();

    // declined confirmation keeps the game
    assert!(!stores.games.delete_game(created.id).await);
    assert_eq!(stores.games.games().len(), 1);

    let before = stores.games.games();
    assert!(
        !stores
            .games
            .edit_game(created.id, input("Blocks", GenreRef::Name("Strategy".to_string())))
            .await
    );
    assert_eq!(recorder.last().unwrap().level, NotificationLevel::Error);
    assert_eq!(stores.games.games(), before);
    assert!(stores.games.state().error.is_some());

    assert!(
        stores
            .games
            .create_game(input("Nowhere", GenreRef::Id(99)))
            .await
            .is_none()
    );
    assert_eq!(stores.games.games(), before);

    assert!(!stores.games.search_by_id(12345).await);
    let state = stores.games.state();
    assert!(state.games.is_empty());
    assert!(state.error.unwrap().contains("not found"));

    assert!(
        SearchForm::new(SearchMode::Id, "abc")
            .submit(&stores.games)
            .await
            .is_err()
    );
}

#[tokio::test]
#[traced_test]
async fn test_edit_keeps_genre_with_duplicate_names() {
    let (config, state, _config_guard) = prepare_env("test_edit_duplicate_genre").await.unwrap();
    let first = insert_genre(&state, "Action").await.unwrap();
    let second = insert_genre(&state, "Action").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let stores = Stores::new(
        ApiClient::new(base_url),
        Arc::new(Recorder::default()),
        Arc::new(AlwaysConfirm),
    );
    assert!(stores.load().await);
    assert_eq!(stores.genres.genre_id_by_name("action"), first);

    let created = stores
        .games
        .create_game(input("Shooter", GenreRef::Id(second)))
        .await
        .unwrap();
    assert_eq!(created.genre_id, second);

    let detail = stores.games.fetch_game(created.id).await.unwrap();
    let mut form = EditForm::open(&detail);
    form.name = "Shooter 2".to_string();
    assert!(form.confirm(&stores.games).await);

    let updated = stores.games.fetch_game(created.id).await.unwrap();
    assert_eq!(updated.name, "Shooter 2");
    assert_eq!(updated.genre_id, second);

    let mut form = EditForm::open(&updated);
    form.set_genre_name("Racing");
    assert!(form.confirm(&stores.games).await);
    let updated = stores.games.fetch_game(created.id).await.unwrap();
    assert_eq!(updated.genre_id, 4);
}
