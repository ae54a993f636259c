//! Playback queue
//!
//! An ordered list of tracks replaced wholesale whenever the active catalog
//! listing changes. Navigation is id-based with wraparound; duplicate ids
//! are not supported (the first match wins).

use beatstore_core::types::Track;

/// Ordered queue for transport navigation
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: Vec<Track>,
}

impl PlayQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the queue wholesale
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Find a track's index by id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// The track after `id`, wrapping past the end to the front
    ///
    /// An id that is no longer in the queue resolves to the first track.
    /// Returns `None` only when the queue is empty.
    pub fn next_after(&self, id: &str) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        let index = match self.position_of(id) {
            Some(i) => (i + 1) % self.tracks.len(),
            None => 0,
        };
        self.tracks.get(index)
    }

    /// The track before `id`, wrapping past the front to the end
    ///
    /// An id that is no longer in the queue resolves to the last track.
    /// Returns `None` only when the queue is empty.
    pub fn previous_before(&self, id: &str) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        let index = match self.position_of(id) {
            Some(i) => (i + self.tracks.len() - 1) % self.tracks.len(),
            None => self.tracks.len() - 1,
        };
        self.tracks.get(index)
    }

    /// First track in the queue
    pub fn first(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in queue order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
