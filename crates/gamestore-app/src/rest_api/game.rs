use gamestore_dal::game::GameRepository;

use crate::state::AppState;
use axum::routing::get;

crate::repository_from_request!(GameRepository);

mod crud_api {
    use super::*;
    use crate::{error::ApiResult, validate::Garde};
    use axum::{
        extract::{OriginalUri, Path},
        response::IntoResponse,
        Json,
    };
    use gamestore_dal::game::Game;
    use gamestore_types::{CreateGame, GameSummary, UpdateGame};
    use http::{header::LOCATION, StatusCode};
    use tracing::debug;

    pub async fn list(repository: GameRepository) -> ApiResult<impl IntoResponse> {
        let games = repository.list().await?;
        let games = games
            .iter()
            .map(Game::to_summary)
            .collect::<Result<Vec<GameSummary>, _>>()?;
        Ok((StatusCode::OK, Json(games)))
    }

    pub async fn get(
        Path(id): Path<i64>,
        repository: GameRepository,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.get(id).await?;

        Ok((StatusCode::OK, Json(record.to_detail())))
    }

    pub async fn create(
        OriginalUri(uri): OriginalUri,
        repository: GameRepository,
        Garde(Json(payload)): Garde<Json<CreateGame>>,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.create(Game::from(payload)).await?;
        let location = format!("{}/{}", uri.path().trim_end_matches('/'), record.id);
        debug!("Created game at {location}");

        Ok((
            StatusCode::CREATED,
            [(LOCATION, location)],
            Json(record.to_detail()),
        ))
    }

    pub async fn update(
        Path(id): Path<i64>,
        repository: GameRepository,
        Garde(Json(payload)): Garde<Json<UpdateGame>>,
    ) -> ApiResult<impl IntoResponse> {
        repository.update(Game::from_update(id, payload)).await?;

        Ok(StatusCode::NO_CONTENT)
    }

    /// Succeeds whether or not the game existed.
    pub async fn delete(
        Path(id): Path<i64>,
        repository: GameRepository,
    ) -> ApiResult<impl IntoResponse> {
        repository.delete(id).await?;

        Ok(StatusCode::NO_CONTENT)
    }
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(crud_api::list).post(crud_api::create))
        .route(
            "/{id}",
            get(crud_api::get)
                .put(crud_api::update)
                .delete(crud_api::delete),
        )
}
