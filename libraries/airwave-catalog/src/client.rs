//! Catalog provider client.

use crate::error::{CatalogError, Result};
use crate::types::{ApiTrack, CatalogConfig, SearchResponse, StreamUrlResponse};
use airwave_core::{TrackCatalog, TrackId, TrackSummary};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for a SoundCloud-style track catalog API.
///
/// # Example
///
/// ```ignore
/// use airwave_catalog::{CatalogClient, CatalogConfig};
///
/// let config = CatalogConfig::with_client_id("https://api.catalog.example", "client-id");
/// let client = CatalogClient::new(config)?;
///
/// let tracks = client.search("daft punk", 20).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
    client_id: Option<String>,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Airwave/{} (Catalog)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self {
            http,
            base_url,
            client_id: config.client_id,
        })
    }

    /// Get the normalized provider base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog for tracks matching `query`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<TrackSummary>> {
        let url = format!("{}/tracks", self.base_url);
        debug!(url = %url, query = %query, limit = limit, "Searching catalog");

        let mut request = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", &limit.to_string())]);
        if let Some(client_id) = &self.client_id {
            request = request.query(&[("client_id", client_id.as_str())]);
        }

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();

        if status.is_success() {
            let results: SearchResponse = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse search response: {}", e))
            })?;

            let mut tracks: Vec<TrackSummary> = results
                .into_tracks()
                .into_iter()
                .map(ApiTrack::into_summary)
                .collect();
            tracks.truncate(limit);

            debug!(count = tracks.len(), "Catalog search complete");
            Ok(tracks)
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }

    /// Fetch a single track by id.
    pub async fn track(&self, id: &TrackId) -> Result<TrackSummary> {
        let url = format!("{}/tracks/{}", self.base_url, id);
        debug!(url = %url, track_id = %id, "Fetching track");

        let mut request = self.http.get(&url);
        if let Some(client_id) = &self.client_id {
            request = request.query(&[("client_id", client_id.as_str())]);
        }

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();

        if status.is_success() {
            let track: ApiTrack = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse track response: {}", e))
            })?;
            Ok(track.into_summary())
        } else if status.as_u16() == 404 {
            Err(CatalogError::NotFound(id.clone()))
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }

    /// Resolve a playable stream URL for `track`.
    ///
    /// Prefers the track's embedded stream URL; only falls back to a
    /// provider round-trip when none is embedded.
    pub async fn stream_url(&self, track: &TrackSummary) -> Result<String> {
        if let Some(stream_url) = &track.stream_url {
            debug!(track_id = %track.id, "Using embedded stream URL");
            return Ok(stream_url.clone());
        }

        let url = format!("{}/tracks/{}/stream", self.base_url, track.id);
        debug!(url = %url, track_id = %track.id, "Resolving stream URL");

        let mut request = self.http.get(&url);
        if let Some(client_id) = &self.client_id {
            request = request.query(&[("client_id", client_id.as_str())]);
        }

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();

        if status.is_success() {
            let body: StreamUrlResponse = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse stream response: {}", e))
            })?;
            body.url
                .ok_or_else(|| CatalogError::MissingStreamUrl(track.id.clone()))
        } else if status.as_u16() == 404 {
            Err(CatalogError::NotFound(track.id.clone()))
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }
}

#[async_trait]
impl TrackCatalog for CatalogClient {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> airwave_core::Result<Vec<TrackSummary>> {
        CatalogClient::search(self, query, limit)
            .await
            .map_err(Into::into)
    }

    async fn track(&self, id: &TrackId) -> airwave_core::Result<TrackSummary> {
        CatalogClient::track(self, id).await.map_err(Into::into)
    }

    async fn stream_url(&self, track: &TrackSummary) -> airwave_core::Result<String> {
        CatalogClient::stream_url(self, track)
            .await
            .map_err(Into::into)
    }
}

/// Distinguish connectivity failures from other transport errors.
fn classify_transport(e: reqwest::Error) -> CatalogError {
    if e.is_connect() || e.is_timeout() {
        CatalogError::Unreachable(e.to_string())
    } else {
        CatalogError::Request(e)
    }
}

async fn api_error(status: u16, response: reqwest::Response) -> CatalogError {
    let message = response.text().await.unwrap_or_default();
    CatalogError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(CatalogClient::new(CatalogConfig::new("https://api.example.com")).is_ok());
        assert!(CatalogClient::new(CatalogConfig::new("http://localhost:8080")).is_ok());

        assert!(CatalogClient::new(CatalogConfig::new("")).is_err());
        assert!(CatalogClient::new(CatalogConfig::new("not-a-url")).is_err());
        assert!(CatalogClient::new(CatalogConfig::new("ftp://api.example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client =
            CatalogClient::new(CatalogConfig::new("https://api.example.com///")).expect("valid");
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
