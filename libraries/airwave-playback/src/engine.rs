//! Platform-agnostic audio engine seam
//!
//! Abstracts the platform audio API (an HTML5/streaming audio element on
//! the web, a native backend elsewhere) behind two traits: the engine
//! constructs handles, a handle controls one loaded source.

use crate::error::Result;
use std::time::Duration;

/// A single loaded audio source
///
/// The session owns at most one handle at a time and tears it down
/// (stop + unload) before constructing a successor.
pub trait AudioHandle: Send {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback, keeping the source loaded
    fn pause(&mut self);

    /// Stop playback and rewind
    fn stop(&mut self);

    /// Seek to a position from the start of the source
    fn seek(&mut self, position: Duration);

    /// Set output gain (0.0 = silent, 1.0 = full)
    fn set_volume(&mut self, gain: f32);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Release the underlying source
    ///
    /// After unload the handle emits no further lifecycle events.
    fn unload(&mut self);
}

/// Platform audio engine
///
/// Implementors bind a stream URL to a new [`AudioHandle`]. Construction
/// failures surface as [`PlaybackError::EngineLoad`](crate::PlaybackError).
pub trait AudioEngine: Send {
    /// Create a handle bound to `url`
    fn load(&mut self, url: &str) -> Result<Box<dyn AudioHandle>>;
}

/// Lifecycle events reported by the platform for the active handle
///
/// The embedding platform forwards these into
/// [`PlaybackSession::handle_engine_event`](crate::PlaybackSession::handle_engine_event).
/// Unloading a handle severs its callbacks, so events always describe the
/// session's current handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Source metadata became available
    Loaded {
        /// Total source duration
        duration: Duration,
    },

    /// Playback started or resumed
    Played,

    /// Playback paused
    Paused,

    /// Playback stopped
    Stopped,

    /// A seek completed
    Seeked {
        /// Position after the seek
        position: Duration,
    },

    /// The source played to its end
    Ended,
}
