//! Configuration and wire types for the catalog provider.

use airwave_core::{TrackId, TrackSummary};
use serde::{Deserialize, Serialize};

/// Catalog client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Provider base URL, e.g. `https://api.soundcloud.example`
    pub base_url: String,

    /// API client id appended to every request, if the provider needs one
    #[serde(default)]
    pub client_id: Option<String>,
}

impl CatalogConfig {
    /// Create a configuration with no client id.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: None,
        }
    }

    /// Create a configuration carrying an API client id.
    pub fn with_client_id(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: Some(client_id.into()),
        }
    }
}

/// A track as the provider serializes it.
///
/// Fields are tolerant: real-world responses omit most of them, and ids
/// arrive as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiTrack {
    pub id: TrackId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub artwork_url: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub playback_count: Option<u64>,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub stream_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub username: Option<String>,
}

impl ApiTrack {
    /// Normalize into the domain type, filling the placeholders the
    /// provider leaves blank.
    pub(crate) fn into_summary(self) -> TrackSummary {
        TrackSummary {
            id: self.id,
            title: self.title.unwrap_or_else(|| "Unknown Title".to_string()),
            artist_name: self
                .user
                .and_then(|u| u.username)
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            artwork_url: self.artwork_url,
            duration_ms: self.duration.unwrap_or(0),
            playback_count: self.playback_count,
            permalink_url: self.permalink_url,
            stream_url: self.stream_url,
        }
    }
}

/// Search responses come flat or wrapped in a `collection` envelope
/// depending on the provider's pagination mode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResponse {
    Collection { collection: Vec<ApiTrack> },
    Flat(Vec<ApiTrack>),
}

impl SearchResponse {
    pub(crate) fn into_tracks(self) -> Vec<ApiTrack> {
        match self {
            SearchResponse::Collection { collection } => collection,
            SearchResponse::Flat(tracks) => tracks,
        }
    }
}

/// Stream endpoint response body.
#[derive(Debug, Deserialize)]
pub(crate) struct StreamUrlResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_track_fills_placeholders() {
        let track: ApiTrack = serde_json::from_str(r#"{ "id": 7 }"#).unwrap();
        let summary = track.into_summary();
        assert_eq!(summary.id, TrackId::new("7"));
        assert_eq!(summary.title, "Unknown Title");
        assert_eq!(summary.artist_name, "Unknown Artist");
        assert_eq!(summary.duration_ms, 0);
    }

    #[test]
    fn search_response_accepts_both_shapes() {
        let flat: SearchResponse = serde_json::from_str(r#"[{ "id": "a" }]"#).unwrap();
        assert_eq!(flat.into_tracks().len(), 1);

        let wrapped: SearchResponse =
            serde_json::from_str(r#"{ "collection": [{ "id": "a" }, { "id": 2 }] }"#).unwrap();
        assert_eq!(wrapped.into_tracks().len(), 2);
    }
}
