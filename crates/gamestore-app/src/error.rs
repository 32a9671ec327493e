use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::{debug, error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<gamestore_dal::Error> for ApiError {
    fn from(value: gamestore_dal::Error) -> Self {
        match value {
            gamestore_dal::Error::RecordNotFound(what) => ApiError::ResourceNotFound(what),
            e @ gamestore_dal::Error::UnknownGenre(_) => ApiError::InvalidRequest(e.to_string()),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ResourceNotFound(what) => {
                debug!("Not found: {what}");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::InvalidRequest(msg) => {
                debug!("Invalid request: {msg}");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
