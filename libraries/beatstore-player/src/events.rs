//! Player events
//!
//! Event-based communication for UI synchronization. The persistent
//! now-playing bar drains these after each interaction instead of polling
//! every field.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The current track changed
    TrackChanged {
        /// ID of the new current track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Play/pause state changed
    StateChanged {
        /// Whether playback is now running
        is_playing: bool,
    },

    /// Queue replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}
