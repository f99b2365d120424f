//! Playback session controller
//!
//! Coordinates user intent, the catalog provider, the persistence
//! service, and the platform audio engine behind one explicit state
//! machine. The session is an owned, dependency-injected object; there is
//! no process-wide audio state.
//!
//! Locking follows the drop-across-await pattern: session state lives in
//! a `tokio::sync::Mutex` that is never held over a suspension point, and
//! every resumption after an await re-checks the generation counter
//! before touching the audio handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use airwave_core::{PlayHistory, TrackCatalog, TrackId, TrackSummary};

use crate::engine::{AudioEngine, AudioHandle, EngineEvent};
use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::playlist::{Playlist, PlaylistAdd};
use crate::progress::ProgressClock;
use crate::types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, SessionState};
use crate::volume::Volume;

/// The playback session controller
///
/// Owns exactly one audio handle at a time, the linear playlist, the
/// volume/mute pair, the repeat mode, and the progress clock. All
/// mutation happens here, driven by user intent or engine events.
pub struct PlaybackSession<E: AudioEngine> {
    catalog: Arc<dyn TrackCatalog>,
    history: Arc<dyn PlayHistory>,
    inner: Mutex<SessionInner<E>>,
}

struct SessionInner<E: AudioEngine> {
    engine: E,
    state: SessionState,
    current_track: Option<TrackSummary>,
    handle: Option<Box<dyn AudioHandle>>,
    playlist: Playlist,
    volume: Volume,
    repeat: RepeatMode,
    progress: Duration,
    duration: Duration,
    clock: ProgressClock,

    /// Monotonic load generation. A `play_track` call that resumes after
    /// its stream-URL await and finds a newer generation discards its
    /// result instead of reviving a stale track.
    generation: u64,

    pending_events: Vec<PlaybackEvent>,
}

impl<E: AudioEngine> PlaybackSession<E> {
    /// Create a new session wired to its collaborators
    pub fn new(
        engine: E,
        catalog: Arc<dyn TrackCatalog>,
        history: Arc<dyn PlayHistory>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            catalog,
            history,
            inner: Mutex::new(SessionInner {
                engine,
                state: SessionState::Idle,
                current_track: None,
                handle: None,
                playlist: Playlist::new(),
                volume: Volume::new(config.volume),
                repeat: config.repeat,
                progress: Duration::ZERO,
                duration: Duration::ZERO,
                clock: ProgressClock::new(config.progress_interval),
                generation: 0,
                pending_events: Vec::new(),
            }),
        }
    }

    // ===== Transport =====

    /// Load and play a track
    ///
    /// Tears down any existing audio handle first, so no two handles are
    /// ever concurrently active. The history write is issued on entering
    /// `Loading` and never awaited; stream resolution is awaited with the
    /// lock released.
    pub async fn play_track(&self, track: TrackSummary) -> Result<()> {
        let (generation, prior) = {
            let mut inner = self.inner.lock().await;
            let prior = inner.state;
            inner.teardown_handle();
            inner.state = SessionState::Loading;
            inner.generation = inner.generation.wrapping_add(1);
            inner.emit(PlaybackEvent::StateChanged {
                state: SessionState::Loading,
            });
            (inner.generation, prior)
        };

        self.spawn_history_write(track.clone());

        let url = match self.catalog.stream_url(&track).await {
            Ok(url) => url,
            Err(e) => {
                let message = format!("Failed to play track: {e}");
                self.fail_load(generation, prior, &message).await;
                return Err(PlaybackError::StreamResolution(e.to_string()));
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            // A newer play_track superseded this load; discard the result.
            debug!(track_id = %track.id, "discarding stale stream resolution");
            return Ok(());
        }

        let mut handle = match inner.engine.load(&url) {
            Ok(handle) => handle,
            Err(e) => {
                let message = format!("Failed to play track: {e}");
                inner.revert_failed_load(prior, &message);
                return Err(e);
            }
        };

        handle.set_volume(inner.volume.engine_gain());
        handle.play();

        let previous_track_id = inner.current_track.as_ref().map(|t| t.id.clone());
        inner.handle = Some(handle);
        inner.progress = Duration::ZERO;
        inner.duration = Duration::ZERO;
        inner.current_track = Some(track);
        inner.state = SessionState::Playing;
        inner.clock.start();

        let track_id = inner.current_track.as_ref().map(|t| t.id.clone());
        if let Some(track_id) = track_id {
            inner.emit(PlaybackEvent::TrackChanged {
                track_id,
                previous_track_id,
            });
        }
        inner.emit(PlaybackEvent::StateChanged {
            state: SessionState::Playing,
        });

        Ok(())
    }

    /// Fetch a track from the catalog by id, then play it
    ///
    /// A lookup failure is reported like any playback error and leaves
    /// session state untouched.
    pub async fn play_track_by_id(&self, id: &TrackId) -> Result<()> {
        let track = match self.catalog.track(id).await {
            Ok(track) => track,
            Err(e) => {
                let mut inner = self.inner.lock().await;
                inner.emit(PlaybackEvent::Error {
                    message: format!("Track could not be loaded: {e}"),
                });
                return Err(PlaybackError::StreamResolution(e.to_string()));
            }
        };
        self.play_track(track).await
    }

    /// Toggle between playing and paused
    ///
    /// No-op while idle or loading.
    pub async fn toggle_play(&self) {
        let mut inner = self.inner.lock().await;
        match inner.state {
            SessionState::Playing => inner.pause_playback(),
            SessionState::Paused | SessionState::Ended => inner.resume_playback(),
            SessionState::Idle | SessionState::Loading => {}
        }
    }

    /// Pause the current track
    pub async fn pause(&self) {
        self.inner.lock().await.pause_playback();
    }

    /// Resume a paused or ended track
    pub async fn resume(&self) {
        self.inner.lock().await.resume_playback();
    }

    /// Stop playback and release the audio handle
    ///
    /// Also cancels any in-flight load.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation = inner.generation.wrapping_add(1);
        inner.teardown_handle();
        inner.current_track = None;
        inner.progress = Duration::ZERO;
        inner.duration = Duration::ZERO;
        inner.state = SessionState::Idle;
        inner.emit(PlaybackEvent::StateChanged {
            state: SessionState::Idle,
        });
    }

    /// Play the playlist entry after the current track
    ///
    /// Steps by one, wrapping to the first entry when the current track
    /// is last or absent from the playlist. No-op without a current track
    /// or with an empty playlist.
    pub async fn next_track(&self) -> Result<()> {
        let target = {
            let inner = self.inner.lock().await;
            inner
                .current_track
                .as_ref()
                .and_then(|t| inner.playlist.next_after(&t.id))
                .cloned()
        };
        match target {
            Some(track) => self.play_track(track).await,
            None => Ok(()),
        }
    }

    /// Play the playlist entry before the current track
    ///
    /// Steps back by one, wrapping to the last entry when the current
    /// track is first or absent from the playlist.
    pub async fn previous_track(&self) -> Result<()> {
        let target = {
            let inner = self.inner.lock().await;
            inner
                .current_track
                .as_ref()
                .and_then(|t| inner.playlist.previous_before(&t.id))
                .cloned()
        };
        match target {
            Some(track) => self.play_track(track).await,
            None => Ok(()),
        }
    }

    // ===== Seek =====

    /// Seek to a fraction (0.0-1.0) of the current track
    ///
    /// Progress updates immediately; the UI never waits for the engine's
    /// seek callback. No-op until the engine has reported a duration.
    pub async fn seek_position(&self, fraction: f64) {
        let mut inner = self.inner.lock().await;
        if inner.handle.is_none() || inner.duration.is_zero() {
            return;
        }

        let fraction = fraction.clamp(0.0, 1.0);
        let target = inner.duration.mul_f64(fraction).min(inner.duration);

        if let Some(handle) = inner.handle.as_mut() {
            handle.seek(target);
        }
        inner.progress = target;

        let (position_ms, duration_ms) = (inner.progress_ms(), inner.duration_ms());
        inner.emit(PlaybackEvent::PositionUpdate {
            position_ms,
            duration_ms,
        });
    }

    // ===== Volume =====

    /// Set volume (0-100)
    ///
    /// Level 0 forces mute; any non-zero level unmutes.
    pub async fn set_volume(&self, level: u8) {
        let mut inner = self.inner.lock().await;
        inner.volume.set_level(level);
        let gain = inner.volume.engine_gain();
        if let Some(handle) = inner.handle.as_mut() {
            handle.set_volume(gain);
        }
        let (level, is_muted) = (inner.volume.level(), inner.volume.is_muted());
        inner.emit(PlaybackEvent::VolumeChanged { level, is_muted });
    }

    /// Toggle mute without changing the stored volume level
    pub async fn toggle_mute(&self) {
        let mut inner = self.inner.lock().await;
        inner.volume.toggle_mute();
        let gain = inner.volume.engine_gain();
        if let Some(handle) = inner.handle.as_mut() {
            handle.set_volume(gain);
        }
        let (level, is_muted) = (inner.volume.level(), inner.volume.is_muted());
        inner.emit(PlaybackEvent::VolumeChanged { level, is_muted });
    }

    // ===== Repeat =====

    /// Cycle the repeat mode `None -> All -> One -> None`
    pub async fn toggle_repeat(&self) -> RepeatMode {
        let mut inner = self.inner.lock().await;
        inner.repeat = inner.repeat.cycled();
        let mode = inner.repeat;
        inner.emit(PlaybackEvent::RepeatModeChanged { mode });
        mode
    }

    // ===== Playlist =====

    /// Append a track to the playlist
    ///
    /// Re-adding an id already present leaves the playlist unchanged and
    /// queues an [`PlaybackEvent::AlreadyInPlaylist`] notice.
    pub async fn add_to_playlist(&self, track: TrackSummary) -> PlaylistAdd {
        let mut inner = self.inner.lock().await;
        let (track_id, title) = (track.id.clone(), track.title.clone());
        let outcome = inner.playlist.add(track);
        match outcome {
            PlaylistAdd::Added => {
                let length = inner.playlist.len();
                inner.emit(PlaybackEvent::PlaylistChanged { length });
            }
            PlaylistAdd::AlreadyPresent => {
                inner.emit(PlaybackEvent::AlreadyInPlaylist { track_id, title });
            }
        }
        outcome
    }

    /// Remove the track with the given id from the playlist
    pub async fn remove_from_playlist(&self, id: &TrackId) -> bool {
        let mut inner = self.inner.lock().await;
        let removed = inner.playlist.remove(id);
        if removed {
            let length = inner.playlist.len();
            inner.emit(PlaybackEvent::PlaylistChanged { length });
        }
        removed
    }

    /// Remove all playlist entries
    pub async fn clear_playlist(&self) {
        let mut inner = self.inner.lock().await;
        inner.playlist.clear();
        inner.emit(PlaybackEvent::PlaylistChanged { length: 0 });
    }

    /// Snapshot of the playlist in order
    pub async fn playlist(&self) -> Vec<TrackSummary> {
        self.inner.lock().await.playlist.tracks().to_vec()
    }

    // ===== Engine integration =====

    /// Feed a lifecycle event from the platform's audio engine
    ///
    /// Unloading a handle severs its callbacks, so events arriving here
    /// always describe the current handle.
    pub async fn handle_engine_event(&self, event: EngineEvent) -> Result<()> {
        // Decide under the lock; any follow-up play runs after releasing it.
        let advance_to: Option<TrackSummary> = {
            let mut inner = self.inner.lock().await;
            match event {
                EngineEvent::Loaded { duration } => {
                    inner.duration = duration;
                    None
                }
                EngineEvent::Played => {
                    if inner.state != SessionState::Playing {
                        inner.state = SessionState::Playing;
                        inner.emit(PlaybackEvent::StateChanged {
                            state: SessionState::Playing,
                        });
                    }
                    inner.clock.start();
                    None
                }
                EngineEvent::Paused => {
                    if inner.state == SessionState::Playing {
                        inner.state = SessionState::Paused;
                        inner.emit(PlaybackEvent::StateChanged {
                            state: SessionState::Paused,
                        });
                    }
                    inner.clock.stop();
                    None
                }
                EngineEvent::Stopped => {
                    inner.clock.stop();
                    None
                }
                EngineEvent::Seeked { position } => {
                    inner.progress = position.min(inner.duration);
                    let (position_ms, duration_ms) = (inner.progress_ms(), inner.duration_ms());
                    inner.emit(PlaybackEvent::PositionUpdate {
                        position_ms,
                        duration_ms,
                    });
                    None
                }
                EngineEvent::Ended => match inner.repeat {
                    RepeatMode::One => {
                        // Replay in place; the playlist is never consulted.
                        if let Some(handle) = inner.handle.as_mut() {
                            handle.play();
                        }
                        inner.progress = Duration::ZERO;
                        inner.clock.start();
                        None
                    }
                    RepeatMode::All => {
                        let target = inner
                            .current_track
                            .as_ref()
                            .and_then(|t| inner.playlist.next_after(&t.id))
                            .cloned();
                        if target.is_none() {
                            inner.finish_track();
                        }
                        target
                    }
                    RepeatMode::None => {
                        inner.finish_track();
                        None
                    }
                },
            }
        };

        match advance_to {
            Some(track) => self.play_track(track).await,
            None => Ok(()),
        }
    }

    /// Sample the engine position into `progress`
    ///
    /// Driven by the platform on the progress interval while the clock
    /// reports running.
    pub async fn tick(&self) {
        let mut inner = self.inner.lock().await;
        if !inner.clock.is_running() {
            return;
        }
        let position = inner.handle.as_ref().map(|h| h.position());
        if let Some(position) = position {
            inner.progress = position;
            let (position_ms, duration_ms) = (inner.progress_ms(), inner.duration_ms());
            inner.emit(PlaybackEvent::PositionUpdate {
                position_ms,
                duration_ms,
            });
        }
    }

    // ===== State queries =====

    /// Current session state
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state
    }

    /// Currently loaded track, if any
    pub async fn current_track(&self) -> Option<TrackSummary> {
        self.inner.lock().await.current_track.clone()
    }

    /// Active repeat mode
    pub async fn repeat_mode(&self) -> RepeatMode {
        self.inner.lock().await.repeat
    }

    /// Whether the progress clock should be ticking
    pub async fn is_clock_running(&self) -> bool {
        self.inner.lock().await.clock.is_running()
    }

    /// Interval the platform timer should use for [`tick`](Self::tick)
    pub async fn progress_interval(&self) -> Duration {
        self.inner.lock().await.clock.interval()
    }

    /// Point-in-time view of the session for rendering
    pub async fn snapshot(&self) -> PlaybackSnapshot {
        let inner = self.inner.lock().await;
        PlaybackSnapshot {
            current_track: inner.current_track.clone(),
            is_playing: inner.state == SessionState::Playing,
            volume: inner.volume.level(),
            is_muted: inner.volume.is_muted(),
            progress_ms: inner.progress_ms(),
            duration_ms: inner.duration_ms(),
            repeat_mode: inner.repeat,
        }
    }

    /// Drain queued UI events
    pub async fn drain_events(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.inner.lock().await.pending_events)
    }

    // ===== Internal =====

    /// Record the play without blocking or failing playback
    fn spawn_history_write(&self, track: TrackSummary) {
        let history = Arc::clone(&self.history);
        tokio::spawn(async move {
            if let Err(e) = history.record_play(&track).await {
                warn!(track_id = %track.id, error = %e, "failed to record play history");
            }
        });
    }

    /// Handle a stream-resolution failure, unless a newer load owns the
    /// session by now
    async fn fail_load(&self, generation: u64, prior: SessionState, message: &str) {
        let mut inner = self.inner.lock().await;
        if inner.generation == generation {
            inner.revert_failed_load(prior, message);
        }
    }
}

impl<E: AudioEngine> SessionInner<E> {
    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    /// Stop and release the active handle and halt the progress clock
    fn teardown_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
            handle.unload();
        }
        self.clock.stop();
    }

    /// Return to the pre-load state after a failed load
    fn revert_failed_load(&mut self, prior: SessionState, message: &str) {
        self.state = match prior {
            SessionState::Playing | SessionState::Loading => SessionState::Idle,
            other => other,
        };
        self.emit(PlaybackEvent::Error {
            message: message.to_string(),
        });
        let state = self.state;
        self.emit(PlaybackEvent::StateChanged { state });
    }

    fn pause_playback(&mut self) {
        if self.state == SessionState::Playing {
            if let Some(handle) = self.handle.as_mut() {
                handle.pause();
            }
            self.state = SessionState::Paused;
            self.clock.stop();
            self.emit(PlaybackEvent::StateChanged {
                state: SessionState::Paused,
            });
        }
    }

    fn resume_playback(&mut self) {
        if !matches!(self.state, SessionState::Paused | SessionState::Ended) {
            return;
        }
        if self.handle.is_none() {
            return;
        }
        if let Some(handle) = self.handle.as_mut() {
            handle.play();
        }
        self.state = SessionState::Playing;
        self.clock.start();
        self.emit(PlaybackEvent::StateChanged {
            state: SessionState::Playing,
        });
    }

    /// Natural end of the current track with no repeat to apply
    fn finish_track(&mut self) {
        self.clock.stop();
        self.progress = self.duration;
        self.state = SessionState::Ended;
        self.emit(PlaybackEvent::StateChanged {
            state: SessionState::Ended,
        });
    }

    fn progress_ms(&self) -> u64 {
        self.progress.as_millis() as u64
    }

    fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

impl<E: AudioEngine> Drop for SessionInner<E> {
    // Session disposal must release the handle and clock like any other
    // exit path.
    fn drop(&mut self) {
        self.teardown_handle();
    }
}
