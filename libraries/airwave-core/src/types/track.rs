/// Catalog track type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track metadata as returned by the catalog provider
///
/// Immutable once fetched; identity is [`TrackId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Unique track identifier (opaque key)
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist_name: String,

    /// Artwork image URL
    pub artwork_url: Option<String>,

    /// Track duration in milliseconds
    pub duration_ms: u64,

    /// Play count reported by the catalog
    pub playback_count: Option<u64>,

    /// Public catalog page for the track
    pub permalink_url: Option<String>,

    /// Direct stream URL, when the catalog embeds one
    pub stream_url: Option<String>,
}

impl TrackSummary {
    /// Create a track with minimal metadata
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist_name: artist.into(),
            artwork_url: None,
            duration_ms: 0,
            playback_count: None,
            permalink_url: None,
            stream_url: None,
        }
    }

    /// Get the track duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
