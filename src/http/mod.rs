use std::sync::Arc;

use async_trait::async_trait;
use flume::Sender;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{config::SourceConfig, error::LibraryError, event::events::Event, library::RawTrack};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid search url: {0}")]
    Url(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<SourceError> for LibraryError {
    fn from(e: SourceError) -> Self {
        LibraryError::SourceUnavailable(e.to_string())
    }
}

/// Where the catalog comes from. Queried exactly once per session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_tracks(&self) -> Result<Vec<RawTrack>, SourceError>;
}

/// Runs one fetch in the background and reports it as
/// [`Event::CatalogFetched`].
pub fn spawn_fetch(source: Arc<dyn CatalogSource>, event_tx: Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = source.fetch_tracks().await.map_err(LibraryError::from);
        if let Err(e) = &result {
            warn!(error = %e, "catalog_fetch_failed");
        }
        let _ = event_tx.send_async(Event::CatalogFetched(result)).await;
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    result_count: usize,
    results: Vec<RawTrack>,
}

pub fn parse_search_response(body: &str) -> Result<Vec<RawTrack>, SourceError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    debug!(
        result_count = response.result_count,
        parsed = response.results.len(),
        "search_response_parsed"
    );
    Ok(response.results)
}

/// Keyword search against the iTunes Search API.
#[derive(Debug, Clone)]
pub struct ApiService {
    client: reqwest::Client,
    config: SourceConfig,
}

impl ApiService {
    pub fn new(client: reqwest::Client, config: SourceConfig) -> Self {
        Self { client, config }
    }

    pub fn search_url(&self) -> Result<Url, SourceError> {
        let limit = self.config.result_limit.to_string();
        Url::parse_with_params(
            &self.config.api_url,
            &[
                ("term", self.config.search_term.as_str()),
                ("entity", "song"),
                ("limit", limit.as_str()),
            ],
        )
        .map_err(|e| SourceError::Url(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for ApiService {
    async fn fetch_tracks(&self) -> Result<Vec<RawTrack>, SourceError> {
        let url = self.search_url()?;
        info!(url = url.as_str(), "catalog_fetch_started");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = parse_search_response(&body)?;
        info!(count = tracks.len(), "catalog_fetch_finished");
        Ok(tracks)
    }
}
