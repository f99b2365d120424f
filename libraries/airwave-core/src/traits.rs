/// Collaborator traits for the playback session
use crate::error::Result;
use crate::types::{HistoryRecord, TrackId, TrackSummary};
use async_trait::async_trait;

/// Track catalog provider
///
/// Implemented by the HTTP catalog adapter; test suites supply stubs.
/// The playback session only ever talks to the catalog through this seam.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Search the catalog for tracks matching `query`
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<TrackSummary>>;

    /// Fetch a single track by id
    async fn track(&self, id: &TrackId) -> Result<TrackSummary>;

    /// Resolve a playable stream URL for a track
    ///
    /// Implementations may use the track's embedded stream URL when
    /// present and only fall back to a provider round-trip otherwise.
    async fn stream_url(&self, track: &TrackSummary) -> Result<String>;
}

/// Persistence service for the recently-played history
///
/// Stores enforce the recency-cache contract: at most one record per
/// track id, at most 20 records total, newest first.
#[async_trait]
pub trait PlayHistory: Send + Sync {
    /// Record a play of `track`, replacing any existing record for the
    /// same track id
    async fn record_play(&self, track: &TrackSummary) -> Result<HistoryRecord>;

    /// List recent plays, newest first, truncated to `limit`
    async fn list_recent(&self, limit: usize) -> Result<Vec<HistoryRecord>>;
}
