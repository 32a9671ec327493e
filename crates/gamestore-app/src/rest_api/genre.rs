use gamestore_dal::genre::GenreRepository;

use crate::state::AppState;
use axum::routing::get;

crate::repository_from_request!(GenreRepository);

mod crud_api {
    use super::*;
    use crate::error::ApiResult;
    use axum::{response::IntoResponse, Json};
    use gamestore_types::GenreDto;
    use http::StatusCode;

    pub async fn list(repository: GenreRepository) -> ApiResult<impl IntoResponse> {
        let genres = repository.list().await?;
        let genres: Vec<GenreDto> = genres.into_iter().map(GenreDto::from).collect();
        Ok((StatusCode::OK, Json(genres)))
    }
}

/// Genres are read only over HTTP, they are managed directly in the database.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/", get(crud_api::list))
}
