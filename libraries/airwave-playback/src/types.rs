//! Core types for the playback session

use serde::{Deserialize, Serialize};
use std::time::Duration;

use airwave_core::TrackSummary;

/// Playback session state machine
///
/// ```text
/// Idle ──play_track──▶ Loading ──engine ready──▶ Playing ◀──▶ Paused
///                                                   │
///                                            track ends, no repeat
///                                                   ▼
///                                                 Ended
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No track loaded
    Idle,

    /// Stream URL requested, audio handle being constructed
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Current track finished and no repeat applied
    Ended,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the current track ends
    None,

    /// Advance through the playlist, wrapping at the end
    All,

    /// Replay the current track
    One,
}

impl RepeatMode {
    /// Next mode in the `None -> All -> One -> None` cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::None => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::None,
        }
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 70)
    pub volume: u8,

    /// Initial repeat mode (default: None)
    pub repeat: RepeatMode,

    /// Progress clock sampling interval (default: 500 ms)
    pub progress_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 70,
            repeat: RepeatMode::None,
            progress_interval: Duration::from_millis(500),
        }
    }
}

/// Point-in-time view of the session for UI rendering
///
/// Derived state only; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track currently bound to the audio handle, if any
    pub current_track: Option<TrackSummary>,

    /// Whether audio is actively playing
    pub is_playing: bool,

    /// Volume level (0-100)
    pub volume: u8,

    /// Mute state
    pub is_muted: bool,

    /// Playback position in milliseconds
    pub progress_ms: u64,

    /// Current track duration in milliseconds (0 until the engine loads)
    pub duration_ms: u64,

    /// Active repeat mode
    pub repeat_mode: RepeatMode,
}
