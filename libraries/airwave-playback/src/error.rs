//! Error types for the playback session

use thiserror::Error;

/// Playback errors
///
/// None of these are fatal to the session; after any failure the
/// controller remains usable and retry is manual.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Catalog lookup or stream-URL fetch failed
    #[error("Stream resolution failed: {0}")]
    StreamResolution(String),

    /// Audio engine failed to initialize the source
    #[error("Audio engine failed to load source: {0}")]
    EngineLoad(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
