use gamestore_types::{CreateGame, GameDetail, GameSummary, GenreDto, UpdateGame};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// HTTP adapter for the catalog API.
///
/// Request bodies are sent with capitalized field names and dates are parsed
/// into [`time::Date`] on every read, see [`gamestore_types`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, operation: &'static str, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::Url { operation, source })
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;
        let status = response.status();
        debug!("{operation}: {status}");
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                operation,
                status,
                body,
            })
        }
    }

    async fn read_json<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T> {
        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { operation, source })
    }

    pub async fn list_games(&self) -> Result<Vec<GameSummary>> {
        const OP: &str = "list games";
        let url = self.url(OP, "games")?;
        let response = self.send(OP, self.http.get(url)).await?;
        Self::read_json(OP, response).await
    }

    pub async fn get_game(&self, id: i64) -> Result<GameDetail> {
        const OP: &str = "get game";
        let url = self.url(OP, &format!("games/{id}"))?;
        let response = self.send(OP, self.http.get(url)).await?;
        Self::read_json(OP, response).await
    }

    pub async fn create_game(&self, game: &CreateGame) -> Result<GameDetail> {
        const OP: &str = "create game";
        let url = self.url(OP, "games")?;
        let response = self.send(OP, self.http.post(url).json(game)).await?;
        Self::read_json(OP, response).await
    }

    /// Replaces the game and returns its state as stored by the server.
    ///
    /// The update itself answers with an empty body, so the result comes from
    /// a follow-up read rather than from the payload that was sent.
    pub async fn update_game(&self, id: i64, game: &UpdateGame) -> Result<GameDetail> {
        const OP: &str = "update game";
        let url = self.url(OP, &format!("games/{id}"))?;
        self.send(OP, self.http.put(url).json(game)).await?;
        self.get_game(id).await
    }

    pub async fn delete_game(&self, id: i64) -> Result<()> {
        const OP: &str = "delete game";
        let url = self.url(OP, &format!("games/{id}"))?;
        self.send(OP, self.http.delete(url)).await?;
        Ok(())
    }

    pub async fn list_genres(&self) -> Result<Vec<GenreDto>> {
        const OP: &str = "list genres";
        let url = self.url(OP, "genres")?;
        let response = self.send(OP, self.http.get(url)).await?;
        Self::read_json(OP, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new(Url::parse("http://localhost:3000/api").unwrap());
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/api/");
        assert_eq!(
            client.url("get game", "games/5").unwrap().as_str(),
            "http://localhost:3000/api/games/5"
        );

        let client = ApiClient::new(Url::parse("http://localhost:3000").unwrap());
        assert_eq!(
            client.url("list genres", "genres").unwrap().as_str(),
            "http://localhost:3000/genres"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_carries_operation() {
        // nothing listens on port 9 (discard) in test environments
        let client = ApiClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        let err = client.list_genres().await.unwrap_err();
        assert_eq!(err.operation(), "list genres");
        assert!(matches!(err, ClientError::Transport { .. }));
    }
}
