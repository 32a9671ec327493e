use gamestore_e2e_tests::{insert_genre, launch_env, prepare_env};
use gamestore_types::{GameDetail, GameSummary, GenreDto};
use rust_decimal::Decimal;
use serde_json::json;
use time::macros::date;
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_create_and_list() {
    let (config, state, _config_guard) = prepare_env("test_create_and_list").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let client = reqwest::Client::new();
    let api_url = base_url.join("games").unwrap();

    let payload = json!({
        "Name": "Test Game",
        "GenreId": 1,
        "Price": 59.99,
        "ReleaseDate": "2023-01-01"
    });
    let response = client.post(api_url.clone()).json(&payload).send().await.unwrap();
    info!("Response: {:#?}", response);
    assert_eq!(response.status().as_u16(), 201);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let created: GameDetail = response.json().await.unwrap();
    assert!(created.id > 0);
    assert_eq!(location.unwrap(), format!("/games/{}", created.id));

    let response = client.get(api_url).send().await.unwrap();
    assert!(response.status().is_success());
    let games: Vec<GameSummary> = response.json().await.unwrap();
    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert_eq!(game.name, "Test Game");
    assert_eq!(game.genre, "Fighting");
    assert_eq!(game.price, Decimal::new(5999, 2));
    assert_eq!(game.release_date, date!(2023 - 01 - 01));
}

#[tokio::test]
#[traced_test]
async fn test_inserted_genre_resolves_in_summary() {
    let (config, state, _config_guard) = prepare_env("test_inserted_genre").await.unwrap();
    let action_id = insert_genre(&state, "Action").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let client = reqwest::Client::new();

    let genres: Vec<GenreDto> = client
        .get(base_url.join("genres").unwrap())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(genres.len(), 6);
    assert!(genres.iter().any(|g| g.id == action_id && g.name == "Action"));

    let payload = json!({
        "name": "Street Brawl",
        "genreId": action_id,
        "price": 19.5,
        "releaseDate": "2020-06-30"
    });
    let response = client
        .post(base_url.join("games").unwrap())
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let games: Vec<GameSummary> = client
        .get(base_url.join("games").unwrap())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(games[0].genre, "Action");
}

#[tokio::test]
#[traced_test]
async fn test_invalid_update_keeps_game() {
    let (config, state, _config_guard) = prepare_env("test_invalid_update").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let client = reqwest::Client::new();

    let payload = json!({
        "Name": "Original",
        "GenreId": 2,
        "Price": 10,
        "ReleaseDate": "2010-10-10"
    });
    let created: GameDetail = client
        .post(base_url.join("games").unwrap())
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let game_url = base_url.join(&format!("games/{}", created.id)).unwrap();

    let update = json!({
        "Name": "x".repeat(51),
        "GenreId": 2,
        "Price": 10,
        "ReleaseDate": "2010-10-10"
    });
    let response = client.put(game_url.clone()).json(&update).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let update = json!({
        "Name": "Original",
        "GenreId": 2,
        "Price": 100.01,
        "ReleaseDate": "2010-10-10"
    });
    let response = client.put(game_url.clone()).json(&update).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let current: GameDetail = client.get(game_url.clone()).send().await.unwrap().json().await.unwrap();
    assert_eq!(current, created);

    let update = json!({
        "Name": "Renamed",
        "GenreId": 3,
        "Price": 100,
        "ReleaseDate": "2011-11-11"
    });
    let response = client.put(game_url.clone()).json(&update).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);
    assert!(response.bytes().await.unwrap().is_empty());

    let current: GameDetail = client.get(game_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(current.name, "Renamed");
    assert_eq!(current.genre_id, 3);
    assert_eq!(current.price, Decimal::ONE_HUNDRED);
    assert_eq!(current.release_date, date!(2011 - 11 - 11));
}

#[tokio::test]
#[traced_test]
async fn test_missing_game_and_delete() {
    let (config, state, _config_guard) = prepare_env("test_missing_game").await.unwrap();
    let (base_url, _server) = launch_env(config, state).await.unwrap();
    let client = reqwest::Client::new();

    let response = client
        .get(base_url.join("games/999").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    assert!(response.bytes().await.unwrap().is_empty());

    let payload = json!({
        "Name": "Doomed",
        "GenreId": 4,
        "Price": 1,
        "ReleaseDate": "1999-12-31"
    });
    let created: GameDetail = client
        .post(base_url.join("games").unwrap())
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let game_url = base_url.join(&format!("games/{}", created.id)).unwrap();

    for _ in 0..2 {
        let response = client.delete(game_url.clone()).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 204);
    }
    let response = client.get(game_url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .delete(base_url.join("games/4242").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
}
