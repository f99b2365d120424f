//! Playback events
//!
//! Event-based communication for UI synchronization. The session queues
//! events at key points (state changes, track changes, progress ticks,
//! notices, errors); the embedding UI drains the queue and renders.

use crate::types::{RepeatMode, SessionState};
use airwave_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Session state changed (loading, playing, paused, ended)
    StateChanged {
        /// The new session state
        state: SessionState,
    },

    /// A different track became current
    TrackChanged {
        /// Id of the new current track
        track_id: TrackId,
        /// Id of the previous track, if any
        previous_track_id: Option<TrackId>,
    },

    /// Position update (one per progress tick, and after seeks)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration (0 until the engine reports it)
        duration_ms: u64,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Repeat mode changed
    RepeatModeChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Playlist contents changed (add/remove/clear)
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Add was a no-op because the track is already in the playlist
    ///
    /// A notice for the UI, deliberately not an error.
    AlreadyInPlaylist {
        /// Id of the duplicate track
        track_id: TrackId,
        /// Title for the user-facing message
        title: String,
    },

    /// A playback attempt failed; the session remains usable
    Error {
        /// User-facing error message
        message: String,
    },
}
