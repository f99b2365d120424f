//! Linear playlist
//!
//! Ordered sequence of catalog tracks with uniqueness enforced by track
//! id. Navigation wraps: stepping past either end lands on the opposite
//! end, and a current track that is no longer in the playlist also wraps.

use airwave_core::{TrackId, TrackSummary};

/// Outcome of a playlist add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistAdd {
    /// Track appended to the end
    Added,

    /// A track with the same id is already present; the playlist is
    /// unchanged and the caller should surface a notice, not an error
    AlreadyPresent,
}

/// Ordered, de-duplicated track sequence
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<TrackSummary>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track, enforcing id uniqueness
    pub fn add(&mut self, track: TrackSummary) -> PlaylistAdd {
        if self.tracks.iter().any(|t| t.id == track.id) {
            return PlaylistAdd::AlreadyPresent;
        }
        self.tracks.push(track);
        PlaylistAdd::Added
    }

    /// Remove the track with the given id
    ///
    /// Returns true if a track was removed.
    pub fn remove(&mut self, id: &TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != *id);
        self.tracks.len() != before
    }

    /// Remove all tracks
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in insertion order
    pub fn tracks(&self) -> &[TrackSummary] {
        &self.tracks
    }

    /// Position of the track with the given id
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == *id)
    }

    /// Track that follows `current`, wrapping to the first entry when
    /// `current` is last or not present
    pub fn next_after(&self, current: &TrackId) -> Option<&TrackSummary> {
        if self.tracks.is_empty() {
            return None;
        }
        match self.position_of(current) {
            Some(index) if index + 1 < self.tracks.len() => self.tracks.get(index + 1),
            _ => self.tracks.first(),
        }
    }

    /// Track that precedes `current`, wrapping to the last entry when
    /// `current` is first or not present
    pub fn previous_before(&self, current: &TrackId) -> Option<&TrackSummary> {
        if self.tracks.is_empty() {
            return None;
        }
        match self.position_of(current) {
            Some(index) if index > 0 => self.tracks.get(index - 1),
            _ => self.tracks.last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> TrackSummary {
        TrackSummary::new(id, format!("Track {id}"), "Test Artist")
    }

    #[test]
    fn add_and_len() {
        let mut playlist = Playlist::new();
        assert!(playlist.is_empty());

        assert_eq!(playlist.add(track("a")), PlaylistAdd::Added);
        assert_eq!(playlist.add(track("b")), PlaylistAdd::Added);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn duplicate_add_reports_already_present() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));

        assert_eq!(playlist.add(track("a")), PlaylistAdd::AlreadyPresent);
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn remove_by_id() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));

        assert!(playlist.remove(&TrackId::new("a")));
        assert!(!playlist.remove(&TrackId::new("a")));
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.tracks()[0].id.as_str(), "b");
    }

    #[test]
    fn next_steps_and_wraps() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));
        playlist.add(track("c"));

        let next = playlist.next_after(&TrackId::new("a")).unwrap();
        assert_eq!(next.id.as_str(), "b");

        // Last entry wraps to the first
        let next = playlist.next_after(&TrackId::new("c")).unwrap();
        assert_eq!(next.id.as_str(), "a");
    }

    #[test]
    fn previous_steps_and_wraps() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));
        playlist.add(track("c"));

        let previous = playlist.previous_before(&TrackId::new("b")).unwrap();
        assert_eq!(previous.id.as_str(), "a");

        // First entry wraps to the last
        let previous = playlist.previous_before(&TrackId::new("a")).unwrap();
        assert_eq!(previous.id.as_str(), "c");
    }

    #[test]
    fn unknown_current_wraps_to_ends() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));

        let missing = TrackId::new("zz");
        assert_eq!(playlist.next_after(&missing).unwrap().id.as_str(), "a");
        assert_eq!(playlist.previous_before(&missing).unwrap().id.as_str(), "b");
    }

    #[test]
    fn empty_playlist_navigates_nowhere() {
        let playlist = Playlist::new();
        assert!(playlist.next_after(&TrackId::new("a")).is_none());
        assert!(playlist.previous_before(&TrackId::new("a")).is_none());
    }
}
