//! Beat Store - Playback Controller
//!
//! Preview playback state for the storefront's persistent now-playing bar.
//!
//! This crate provides:
//! - [`PlayQueue`]: the ordered track list with wraparound navigation
//! - [`PlayerManager`]: current track + play/pause flag + transport
//!   operations (play, pause, toggle, next, previous)
//! - [`PlayerEvent`]: UI synchronization events drained after each
//!   interaction
//!
//! # Architecture
//!
//! `beatstore-player` is UI-agnostic: it holds the state the audio element
//! follows, never the audio element itself. Decoding and actual playback
//! are browser/platform concerns outside this crate. Analytics go through
//! the fire-and-forget
//! [`AnalyticsSink`](beatstore_core::analytics::AnalyticsSink) boundary.
//!
//! # Example
//!
//! ```rust
//! use beatstore_player::PlayerManager;
//! use beatstore_core::types::Track;
//!
//! let mut player = PlayerManager::default();
//! player.set_queue(vec![
//!     Track::new("b1", "Night Loop", "Producer X"),
//!     Track::new("b2", "Day Loop", "Producer X"),
//! ]);
//!
//! // The first track is selected, but playback has not started
//! assert_eq!(player.current_track().unwrap().id, "b1");
//! assert!(!player.is_playing());
//!
//! player.toggle_play();
//! assert!(player.is_playing());
//!
//! player.next_track();
//! assert_eq!(player.current_track().unwrap().id, "b2");
//! ```

#![forbid(unsafe_code)]

mod events;
mod manager;
mod queue;

// Public exports
pub use events::PlayerEvent;
pub use manager::PlayerManager;
pub use queue::PlayQueue;
