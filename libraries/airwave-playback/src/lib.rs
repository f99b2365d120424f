//! Airwave - Playback Session Management
//!
//! Platform-agnostic playback session management for the Airwave web
//! music player.
//!
//! This crate provides:
//! - Transport controls (play/pause/seek/volume/mute)
//! - A linear playlist with id uniqueness and wrap-around navigation
//! - Repeat modes (None, All, One)
//! - A progress clock with leak-free start/stop semantics (500 ms default)
//! - Recently-played history writes that never block playback
//! - Stale-load cancellation via a monotonic generation counter
//!
//! # Architecture
//!
//! `airwave-playback` is completely platform-agnostic:
//! - Audio output is provided via the [`AudioEngine`] / [`AudioHandle`]
//!   traits
//! - The catalog and persistence collaborators are the `airwave-core`
//!   traits, injected at construction
//! - No global audio state; each [`PlaybackSession`] is an owned object
//!
//! The embedding platform forwards engine lifecycle callbacks into
//! [`PlaybackSession::handle_engine_event`], drives
//! [`PlaybackSession::tick`] on the progress interval while the clock
//! runs, and renders from [`PlaybackSession::drain_events`] and
//! [`PlaybackSession::snapshot`].
//!
//! # Example
//!
//! ```rust,no_run
//! use airwave_core::{
//!     AirwaveError, HistoryRecord, PlayHistory, TrackCatalog, TrackId, TrackSummary,
//! };
//! use airwave_playback::{
//!     AudioEngine, AudioHandle, PlaybackConfig, PlaybackSession, Result,
//! };
//! use async_trait::async_trait;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! // Bind the platform's audio API to the engine seam.
//! struct WebAudio;
//! struct WebHandle;
//!
//! impl AudioHandle for WebHandle {
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_volume(&mut self, _gain: f32) {}
//!     fn position(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!     fn unload(&mut self) {}
//! }
//!
//! impl AudioEngine for WebAudio {
//!     fn load(&mut self, _url: &str) -> Result<Box<dyn AudioHandle>> {
//!         Ok(Box::new(WebHandle))
//!     }
//! }
//!
//! # struct Catalog;
//! # #[async_trait]
//! # impl TrackCatalog for Catalog {
//! #     async fn search(
//! #         &self,
//! #         _query: &str,
//! #         _limit: usize,
//! #     ) -> airwave_core::Result<Vec<TrackSummary>> {
//! #         Ok(Vec::new())
//! #     }
//! #     async fn track(&self, id: &TrackId) -> airwave_core::Result<TrackSummary> {
//! #         Err(AirwaveError::TrackNotFound(id.clone()))
//! #     }
//! #     async fn stream_url(&self, track: &TrackSummary) -> airwave_core::Result<String> {
//! #         track
//! #             .stream_url
//! #             .clone()
//! #             .ok_or_else(|| AirwaveError::catalog("no stream url"))
//! #     }
//! # }
//! # struct History;
//! # #[async_trait]
//! # impl PlayHistory for History {
//! #     async fn record_play(&self, track: &TrackSummary) -> airwave_core::Result<HistoryRecord> {
//! #         Ok(HistoryRecord::from_track(1, track, chrono::Utc::now()))
//! #     }
//! #     async fn list_recent(&self, _limit: usize) -> airwave_core::Result<Vec<HistoryRecord>> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Catalog and History implement the airwave-core traits.
//!     let session = PlaybackSession::new(
//!         WebAudio,
//!         Arc::new(Catalog),
//!         Arc::new(History),
//!         PlaybackConfig::default(),
//!     );
//!
//!     let mut track = TrackSummary::new("42", "One More Time", "Daft Punk");
//!     track.stream_url = Some("https://cdn.example.com/42.mp3".into());
//!
//!     session.add_to_playlist(track.clone()).await;
//!     session.play_track(track).await?;
//!     session.set_volume(80).await;
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod events;
mod playlist;
mod progress;
mod session;
pub mod types;
mod volume;

// Public exports
pub use engine::{AudioEngine, AudioHandle, EngineEvent};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use playlist::{Playlist, PlaylistAdd};
pub use progress::ProgressClock;
pub use session::PlaybackSession;
pub use types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, SessionState};
pub use volume::Volume;
