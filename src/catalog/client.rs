use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use super::models::{GameRecord, GamesPage, Genre, GenresPage};
use super::query::GameFilter;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Network failure, timeout, or an unreadable payload.
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The catalog answered with a non-success status (bad key, outage).
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
}

/// Client for the external game-catalog API. Only the first page of any
/// listing is ever consumed.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch the full genre list for the filter dropdown.
    pub async fn fetch_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let url = format!("{}/genres", self.base_url);
        debug!(url, "Fetching genre list");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let page: GenresPage = response.json().await?;
        Ok(page.results)
    }

    /// Fetch the first page of games matching the given filters.
    pub async fn fetch_games(&self, filter: &GameFilter) -> Result<Vec<GameRecord>, CatalogError> {
        let url = format!("{}/games", self.base_url);
        debug!(url, ?filter, "Fetching filtered games");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(&filter.query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let page: GamesPage = response.json().await?;
        Ok(page.results)
    }
}
