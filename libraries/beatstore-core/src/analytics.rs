//! Analytics boundary
//!
//! Events are fire-and-forget: recording one must never block or fail the
//! state transition that produced it. A missing sink is modeled by
//! [`NullAnalytics`], which keeps the engines correct without any reporting
//! backend attached.

use crate::types::{ItemCategory, LicenseTier};
use serde::{Deserialize, Serialize};

/// Events emitted by the storefront engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalyticsEvent {
    /// An item was added to the cart
    AddToCart {
        /// Catalog item id
        id: String,
        /// Item title
        title: String,
        /// Artist name
        artist: String,
        /// Price of the selected license
        price: f64,
        /// Beat or Pack
        category: ItemCategory,
        /// Selected license tier
        license: LicenseTier,
    },

    /// A track started (or resumed) playing
    BeatPlay {
        /// Track id
        id: String,
        /// Track title
        title: String,
        /// Artist name
        artist: String,
        /// Beat or Pack
        category: ItemCategory,
    },

    /// A track was paused
    BeatPause {
        /// Track id
        id: String,
        /// Track title
        title: String,
        /// Artist name
        artist: String,
        /// Beat or Pack
        category: ItemCategory,
    },

    /// Transport skipped forward
    PlayerNext {
        /// Outgoing track id
        from_id: String,
        /// Incoming track id
        to_id: String,
    },

    /// Transport skipped backward
    PlayerPrevious {
        /// Outgoing track id
        from_id: String,
        /// Incoming track id
        to_id: String,
    },
}

impl AnalyticsEvent {
    /// Wire name of the event, as the reporting backend expects it
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "Add_to_cart",
            Self::BeatPlay { .. } => "beat_play",
            Self::BeatPause { .. } => "beat_pause",
            Self::PlayerNext { .. } => "player_next",
            Self::PlayerPrevious { .. } => "player_previous",
        }
    }
}

/// Fire-and-forget event reporting
///
/// Implementations must not block and must not surface failures to the
/// caller; the engines proceed as if every `record` succeeded.
pub trait AnalyticsSink: Send + Sync {
    /// Record a single event
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that discards every event
///
/// Used when no reporting backend is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnalytics;

impl AnalyticsSink for NullAnalytics {
    fn record(&self, _event: AnalyticsEvent) {}
}

/// Sink that keeps every event in memory
///
/// Intended for tests and local debugging.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(events) => events.len(),
            Err(_) => 0,
        }
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all recorded events
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn record(&self, event: AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let event = AnalyticsEvent::AddToCart {
            id: "b1".to_string(),
            title: "Night Loop".to_string(),
            artist: "Producer X".to_string(),
            price: 39.99,
            category: ItemCategory::Beat,
            license: LicenseTier::Basic,
        };
        assert_eq!(event.name(), "Add_to_cart");

        let next = AnalyticsEvent::PlayerNext {
            from_id: "b1".to_string(),
            to_id: "b2".to_string(),
        };
        assert_eq!(next.name(), "player_next");
    }

    #[test]
    fn recording_sink_stores_events() {
        let sink = RecordingAnalytics::new();
        assert!(sink.is_empty());

        sink.record(AnalyticsEvent::BeatPlay {
            id: "b1".to_string(),
            title: "Night Loop".to_string(),
            artist: "Producer X".to_string(),
            category: ItemCategory::Beat,
        });
        sink.record(AnalyticsEvent::BeatPause {
            id: "b1".to_string(),
            title: "Night Loop".to_string(),
            artist: "Producer X".to_string(),
            category: ItemCategory::Beat,
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0].name(), "beat_play");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn null_sink_discards() {
        // Correctness must not depend on the sink being present
        let sink = NullAnalytics;
        sink.record(AnalyticsEvent::PlayerPrevious {
            from_id: "b1".to_string(),
            to_id: "b2".to_string(),
        });
    }
}
