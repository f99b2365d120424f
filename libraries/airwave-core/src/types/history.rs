/// Play history types
use crate::types::{TrackId, TrackSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable "recently played" entry
///
/// At most one record per `track_id` exists in a store at any time;
/// replaying a track replaces its old record at the head of the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Store-assigned row id
    pub id: i64,

    /// The played track's opaque key
    pub track_id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork image URL
    pub artwork_url: Option<String>,

    /// Track duration in milliseconds
    pub duration_ms: Option<u64>,

    /// Public catalog page for the track
    pub permalink_url: Option<String>,

    /// Play count reported by the catalog at record time
    pub playback_count: Option<u64>,

    /// When the play was recorded
    pub played_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Build a record from a catalog track, stamped with the given time
    pub fn from_track(id: i64, track: &TrackSummary, played_at: DateTime<Utc>) -> Self {
        Self {
            id,
            track_id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist_name.clone(),
            artwork_url: track.artwork_url.clone(),
            duration_ms: Some(track.duration_ms),
            permalink_url: track.permalink_url.clone(),
            playback_count: track.playback_count,
            played_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_track_identity() {
        let mut track = TrackSummary::new("t9", "Starboy", "The Weeknd");
        track.duration_ms = 230_453;

        let record = HistoryRecord::from_track(1, &track, Utc::now());
        assert_eq!(record.track_id, track.id);
        assert_eq!(record.artist, "The Weeknd");
        assert_eq!(record.duration_ms, Some(230_453));
    }
}
