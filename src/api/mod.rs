//! REST client for the games collection endpoint.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | List | GET | `/games/{node}` |
//! | Create | POST | `/games/{node}` |
//! | Update | PUT | `/games/{node}/{app_id}` |
//! | Delete | DELETE | `/games/{node}/{app_id}` |
//!
//! Requests are sent once. Non-success statuses become [`Error::Api`].

use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::games::{AppId, GamePatch, GameRecord};
use crate::{Error, Result};

const COLLECTION_SEGMENT: &str = "games";

#[derive(Debug, Clone)]
pub struct GamesClient {
    client: Client,
    base_url: Url,
    node: String,
}

impl GamesClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("games-admin/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.parsed_base_url()?,
            node: config.node.clone(),
        })
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    /// `{base}/games/{node}`
    pub fn collection_url(&self) -> Result<Url> {
        self.url_with(&[])
    }

    /// `{base}/games/{node}/{app_id}`, with the id percent-encoded
    pub fn record_url(&self, app_id: &AppId) -> Result<Url> {
        self.url_with(&[app_id.to_string().as_str()])
    }

    fn url_with(&self, extra: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .push(COLLECTION_SEGMENT)
            .push(&self.node)
            .extend(extra);
        Ok(url)
    }

    /// Fetch every record of the collection
    pub async fn list_games(&self) -> Result<Vec<GameRecord>> {
        let url = self.collection_url()?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response, "list games").await?;

        let games: Vec<GameRecord> = response.json().await?;
        log::info!("Loaded {} game records", games.len());
        Ok(games)
    }

    pub async fn create_game(&self, record: &GameRecord) -> Result<()> {
        let url = self.collection_url()?;
        log::info!("Creating game {}", record.app_id);
        self.send_json(self.client.post(url), record, "create game").await
    }

    /// Replace the fields of `app_id` with the full record
    pub async fn update_game(&self, app_id: &AppId, record: &GameRecord) -> Result<()> {
        let url = self.record_url(app_id)?;
        log::info!("Updating game {}", app_id);
        self.send_json(self.client.put(url), record, "update game").await
    }

    /// Send only the fields present in `patch`
    pub async fn patch_game(&self, app_id: &AppId, patch: &GamePatch) -> Result<()> {
        let url = self.record_url(app_id)?;
        log::info!("Updating game {} (partial)", app_id);
        self.send_json(self.client.put(url), patch, "update game").await
    }

    pub async fn delete_game(&self, app_id: &AppId) -> Result<()> {
        let url = self.record_url(app_id)?;
        log::info!("Deleting game {}", app_id);

        let response = self.client.delete(url).send().await?;
        Self::check_status(response, "delete game").await?;
        Ok(())
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        request: reqwest::RequestBuilder,
        body: &B,
        what: &str,
    ) -> Result<()> {
        // .json() sets Content-Type: application/json
        let response = request.json(body).send().await?;
        Self::check_status(response, what).await?;
        Ok(())
    }

    async fn check_status(response: Response, what: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("Failed to {}: {} - {}", what, status, body);
        Err(Error::Api { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str, node: &str) -> GamesClient {
        let config = Config {
            base_url: base_url.to_string(),
            node: node.to_string(),
            ..Default::default()
        };
        GamesClient::new(&config).unwrap()
    }

    #[test]
    fn test_collection_url() {
        let client = client_for("http://localhost:8080", "node1");
        assert_eq!(
            client.collection_url().unwrap().as_str(),
            "http://localhost:8080/games/node1"
        );
    }

    #[test]
    fn test_record_url_keeps_base_path() {
        let client = client_for("http://example.com/api/", "node2");
        assert_eq!(
            client.record_url(&AppId::Number(1)).unwrap().as_str(),
            "http://example.com/api/games/node2/1"
        );
    }

    #[test]
    fn test_record_url_encodes_text_id() {
        let client = client_for("http://localhost:8080", "node1");
        let url = client
            .record_url(&AppId::Text("half life/2".to_string()))
            .unwrap();
        assert_eq!(url.path(), "/games/node1/half%20life%2F2");
    }
}
