//! Player manager - transport orchestration
//!
//! Coordinates the current track, the play/pause flag, and the queue.
//! All operations are synchronous state transitions; the actual audio
//! element lives in the presentation layer and follows this state.

use crate::{events::PlayerEvent, queue::PlayQueue};
use beatstore_core::analytics::{AnalyticsEvent, AnalyticsSink, NullAnalytics};
use beatstore_core::types::Track;
use std::sync::Arc;
use tracing::debug;

/// Central playback state
///
/// One instance per running application, shared by every page that renders
/// the now-playing bar. Two independent axes: which track is current, and
/// whether playback is running. The queue only influences transport
/// navigation, never the play/pause flag on its own.
pub struct PlayerManager {
    // State
    current_track: Option<Track>,
    is_playing: bool,
    queue: PlayQueue,

    // Collaborators
    analytics: Arc<dyn AnalyticsSink>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerManager {
    /// Create a player with no track and an empty queue
    pub fn new(analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            queue: PlayQueue::new(),
            analytics,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue =====

    /// Replace the queue wholesale
    ///
    /// If nothing is selected yet and the new queue is non-empty, its first
    /// track becomes current — but playback does not auto-start.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });

        if self.current_track.is_none() {
            if let Some(first) = self.queue.first().cloned() {
                debug!(track_id = %first.id, "Auto-selecting first queued track");
                self.pending_events.push(PlayerEvent::TrackChanged {
                    track_id: first.id.clone(),
                    previous_track_id: None,
                });
                self.current_track = Some(first);
            }
        }
    }

    // ===== Transport =====

    /// Play a track, or toggle the active one
    ///
    /// The active track toggles play/pause; any other track becomes current
    /// and always starts playing.
    pub fn play_track(&mut self, track: Track) {
        let is_current = self
            .current_track
            .as_ref()
            .is_some_and(|current| current.id == track.id);

        if is_current {
            self.is_playing = !self.is_playing;
            self.emit_state_changed();
        } else {
            let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
            debug!(track_id = %track.id, "Switching current track");

            self.pending_events.push(PlayerEvent::TrackChanged {
                track_id: track.id.clone(),
                previous_track_id,
            });
            self.current_track = Some(track);
            self.is_playing = true;
            self.emit_state_changed();
        }

        self.record_playback_event();
    }

    /// Pause playback unconditionally
    pub fn pause(&mut self) {
        let was_playing = self.is_playing;
        self.is_playing = false;
        if was_playing {
            self.emit_state_changed();
        }

        if let Some(track) = &self.current_track {
            self.analytics.record(AnalyticsEvent::BeatPause {
                id: track.id.clone(),
                title: track.title.clone(),
                artist: track.artist.clone(),
                category: track.category,
            });
        }
    }

    /// Flip play/pause regardless of which track is active
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        self.emit_state_changed();
        self.record_playback_event();
    }

    /// Skip to the next queued track, wrapping past the end
    ///
    /// A no-op when nothing is selected or the queue is empty.
    pub fn next_track(&mut self) {
        let Some(current) = self.current_track.clone() else {
            debug!("Ignoring next with no current track");
            return;
        };
        let Some(target) = self.queue.next_after(&current.id).cloned() else {
            debug!("Ignoring next with empty queue");
            return;
        };

        self.analytics.record(AnalyticsEvent::PlayerNext {
            from_id: current.id,
            to_id: target.id.clone(),
        });
        self.play_track(target);
    }

    /// Skip to the previous queued track, wrapping past the front
    ///
    /// A no-op when nothing is selected or the queue is empty.
    pub fn previous_track(&mut self) {
        let Some(current) = self.current_track.clone() else {
            debug!("Ignoring previous with no current track");
            return;
        };
        let Some(target) = self.queue.previous_before(&current.id).cloned() else {
            debug!("Ignoring previous with empty queue");
            return;
        };

        self.analytics.record(AnalyticsEvent::PlayerPrevious {
            from_id: current.id,
            to_id: target.id.clone(),
        });
        self.play_track(target);
    }

    // ===== Read-only state =====

    /// Currently selected track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Queue contents in order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Number of queued tracks
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain. The now-playing bar
    /// calls this after each interaction to stay in sync.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a state changed event
    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlayerEvent::StateChanged {
            is_playing: self.is_playing,
        });
    }

    /// Report the settled play/pause state for the active track
    fn record_playback_event(&self) {
        let Some(track) = &self.current_track else {
            return;
        };

        let event = if self.is_playing {
            AnalyticsEvent::BeatPlay {
                id: track.id.clone(),
                title: track.title.clone(),
                artist: track.artist.clone(),
                category: track.category,
            }
        } else {
            AnalyticsEvent::BeatPause {
                id: track.id.clone(),
                title: track.title.clone(),
                artist: track.artist.clone(),
                category: track.category,
            }
        };
        self.analytics.record(event);
    }
}

impl Default for PlayerManager {
    fn default() -> Self {
        Self::new(Arc::new(NullAnalytics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: &str) -> Track {
        Track::new(id, format!("Track {}", id), "Test Artist")
    }

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| create_test_track(id)).collect()
    }

    #[test]
    fn create_player() {
        let player = PlayerManager::default();
        assert!(player.current_track().is_none());
        assert!(!player.is_playing());
        assert_eq!(player.queue_len(), 0);
    }

    #[test]
    fn set_queue_selects_first_without_playing() {
        let mut player = PlayerManager::default();
        player.set_queue(tracks(&["1", "2", "3"]));

        assert_eq!(player.current_track().unwrap().id, "1");
        assert!(!player.is_playing());
    }

    #[test]
    fn set_queue_keeps_existing_selection() {
        let mut player = PlayerManager::default();
        player.play_track(create_test_track("x"));

        player.set_queue(tracks(&["1", "2"]));
        assert_eq!(player.current_track().unwrap().id, "x");
    }

    #[test]
    fn play_track_toggles_the_active_track() {
        let mut player = PlayerManager::default();

        player.play_track(create_test_track("1"));
        assert!(player.is_playing());

        player.play_track(create_test_track("1"));
        assert!(!player.is_playing());

        player.play_track(create_test_track("1"));
        assert!(player.is_playing());
    }

    #[test]
    fn play_track_switches_and_forces_playback() {
        let mut player = PlayerManager::default();
        player.play_track(create_test_track("1"));
        player.pause();
        assert!(!player.is_playing());

        player.play_track(create_test_track("2"));
        assert_eq!(player.current_track().unwrap().id, "2");
        assert!(player.is_playing());
    }

    #[test]
    fn pause_is_unconditional() {
        let mut player = PlayerManager::default();
        player.pause();
        assert!(!player.is_playing());

        player.play_track(create_test_track("1"));
        player.pause();
        player.pause();
        assert!(!player.is_playing());
    }

    #[test]
    fn toggle_flips_state() {
        let mut player = PlayerManager::default();
        player.set_queue(tracks(&["1"]));

        player.toggle_play();
        assert!(player.is_playing());
        player.toggle_play();
        assert!(!player.is_playing());
    }

    #[test]
    fn next_with_no_track_or_queue_is_noop() {
        let mut player = PlayerManager::default();
        player.next_track();
        assert!(player.current_track().is_none());

        // Current track but empty queue
        player.play_track(create_test_track("solo"));
        player.next_track();
        assert_eq!(player.current_track().unwrap().id, "solo");
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut player = PlayerManager::default();
        player.set_queue(tracks(&["1", "2", "3"]));
        player.play_track(create_test_track("3"));

        player.next_track();
        assert_eq!(player.current_track().unwrap().id, "1");
        assert!(player.is_playing());

        player.previous_track();
        assert_eq!(player.current_track().unwrap().id, "3");

        player.previous_track();
        assert_eq!(player.current_track().unwrap().id, "2");
    }

    #[test]
    fn single_track_queue_next_degenerates_to_toggle() {
        let mut player = PlayerManager::default();
        player.set_queue(tracks(&["only"]));
        player.play_track(create_test_track("only"));
        assert!(player.is_playing());

        // next targets the same track, so play_track toggles to paused
        player.next_track();
        assert_eq!(player.current_track().unwrap().id, "only");
        assert!(!player.is_playing());
    }

    #[test]
    fn drain_events_reports_transitions() {
        let mut player = PlayerManager::default();
        player.set_queue(tracks(&["1", "2"]));
        player.play_track(create_test_track("2"));

        let events = player.drain_events();
        assert!(events.contains(&PlayerEvent::QueueChanged { length: 2 }));
        assert!(events.iter().any(|e| matches!(
            e,
            PlayerEvent::TrackChanged { track_id, .. } if track_id == "2"
        )));
        assert!(!player.has_pending_events());
    }
}
